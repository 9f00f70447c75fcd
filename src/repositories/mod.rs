pub mod quiz_result_repository;
pub mod study_session_repository;
pub mod user_repository;

pub use quiz_result_repository::{MongoQuizResultRepository, QuizResultRepository};
pub use study_session_repository::{MongoStudySessionRepository, StudySessionRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
