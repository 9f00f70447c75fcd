pub mod generation_service;
pub mod model_service;
pub mod quiz_result_service;
pub mod study_session_service;
pub mod user_service;

pub use generation_service::GenerationService;
pub use model_service::{CompletionProvider, OpenAiProvider};
pub use quiz_result_service::QuizResultService;
pub use study_session_service::StudySessionService;
pub use user_service::UserService;
