use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(email: &str, password_hash: &str, full_name: Option<String>) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            full_name,
            password_hash: password_hash.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
impl User {
    pub fn test_user(email: &str) -> Self {
        User::new(email, "$argon2id$fake-hash", Some("Test User".to_string()))
    }
}
