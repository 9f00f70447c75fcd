use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Difficulty;

/// Output language for generated content. Only affects prompt wording; the
/// response format contract is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bg,
}

pub const SUBJECT_MIN_CHARS: usize = 3;
pub const SUBJECT_MAX_CHARS: usize = 500;

/// Trim the subject and enforce length bounds. Every generation entry point
/// goes through this before any provider call is made.
pub fn normalize_subject(raw: &str) -> AppResult<String> {
    let subject = raw.trim();
    let len = subject.chars().count();
    if !(SUBJECT_MIN_CHARS..=SUBJECT_MAX_CHARS).contains(&len) {
        return Err(AppError::ValidationError(format!(
            "Subject must be between {} and {} characters",
            SUBJECT_MIN_CHARS, SUBJECT_MAX_CHARS
        )));
    }
    Ok(subject.to_string())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[validate(length(max = 255))]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateSummaryRequest {
    #[validate(length(min = 3, max = 500))]
    pub subject: String,

    pub difficulty: Difficulty,

    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 3, max = 500))]
    pub subject: String,

    #[validate(length(min = 1))]
    pub session_id: String,

    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveQuizResultRequest {
    #[validate(length(min = 1))]
    pub session_id: String,

    #[validate(range(min = 1))]
    pub total_questions: i32,

    #[validate(range(min = 0))]
    pub correct_answers: i32,

    #[validate(range(min = 0.0, max = 100.0))]
    pub score_percentage: f64,

    pub time_taken_seconds: Option<i64>,
}
