use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of a completed quiz attempt. Written once when the client submits
/// a finished quiz, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizResult {
    pub id: String,
    pub user_id: String,
    pub session_id: String,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub score_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_taken_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl QuizResult {
    pub fn new(
        user_id: &str,
        session_id: &str,
        total_questions: i32,
        correct_answers: i32,
        score_percentage: f64,
        time_taken_seconds: Option<i64>,
    ) -> Self {
        QuizResult {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            session_id: session_id.to_string(),
            total_questions,
            correct_answers,
            score_percentage,
            time_taken_seconds,
            created_at: Some(Utc::now()),
        }
    }
}
