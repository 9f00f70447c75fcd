pub mod quiz_question;
pub mod quiz_result;
pub mod study_session;
pub mod user;

pub use quiz_question::QuizQuestion;
pub use quiz_result::QuizResult;
pub use study_session::{Difficulty, StudySession};
pub use user::User;
