use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prompt complexity tier for generated summaries.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Simple,
    Normal,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Simple => write!(f, "simple"),
            Difficulty::Normal => write!(f, "normal"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

/// One summary-generation run and its persisted output. Owned by exactly one
/// user; the quiz path requires one of these to exist first.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudySession {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub difficulty: Difficulty,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl StudySession {
    pub fn new(user_id: &str, subject: &str, difficulty: Difficulty, summary: &str) -> Self {
        StudySession {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            subject: subject.to_string(),
            difficulty,
            summary: summary.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}
