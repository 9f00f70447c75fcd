use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Difficulty, QuizQuestion, QuizResult, StudySession, User};

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: UserDto,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudySessionDto {
    pub id: String,
    pub subject: String,
    pub difficulty: Difficulty,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<StudySession> for StudySessionDto {
    fn from(session: StudySession) -> Self {
        StudySessionDto {
            id: session.id,
            subject: session.subject,
            difficulty: session.difficulty,
            summary: session.summary,
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResultDto {
    pub id: String,
    pub session_id: String,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub score_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_taken_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<QuizResult> for QuizResultDto {
    fn from(result: QuizResult) -> Self {
        QuizResultDto {
            id: result.id,
            session_id: result.session_id,
            total_questions: result.total_questions,
            correct_answers: result.correct_answers,
            score_percentage: result.score_percentage,
            time_taken_seconds: result.time_taken_seconds,
            created_at: result.created_at,
        }
    }
}

/// Result row joined with the subject and difficulty of the session it was
/// taken against, for the history view.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResultWithSessionDto {
    #[serde(flatten)]
    pub result: QuizResultDto,
    pub subject: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_dto_hides_password_hash() {
        let user = User::new("john@example.com", "secret-hash", None);
        let dto = UserDto::from(user);

        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("john@example.com"));
    }

    #[test]
    fn test_quiz_result_with_session_flattens_result_fields() {
        let result = QuizResult::new("user-1", "session-1", 5, 3, 60.0, None);
        let dto = QuizResultWithSessionDto {
            result: QuizResultDto::from(result),
            subject: "Photosynthesis".to_string(),
            difficulty: Difficulty::Simple,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["session_id"], "session-1");
        assert_eq!(json["subject"], "Photosynthesis");
        assert_eq!(json["difficulty"], "simple");
    }
}
