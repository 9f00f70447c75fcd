use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Difficulty, StudySession},
    repositories::StudySessionRepository,
};

pub struct StudySessionService {
    repository: Arc<dyn StudySessionRepository>,
}

impl StudySessionService {
    pub fn new(repository: Arc<dyn StudySessionRepository>) -> Self {
        Self { repository }
    }

    /// Persist the output of a summary-generation run. The summary text is
    /// stored verbatim.
    pub async fn create_session(
        &self,
        user_id: &str,
        subject: &str,
        difficulty: Difficulty,
        summary: &str,
    ) -> AppResult<StudySession> {
        let session = StudySession::new(user_id, subject, difficulty, summary);
        let created = self.repository.create(session).await?;
        Ok(created)
    }

    /// Fetch a session only if it belongs to the requester. The quiz path
    /// requires this before any provider call.
    pub async fn get_owned_session(&self, id: &str, user_id: &str) -> AppResult<StudySession> {
        self.repository
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Study session not found".to_string()))
    }

    pub async fn list_sessions(&self, user_id: &str) -> AppResult<Vec<StudySession>> {
        self.repository.list_by_user(user_id).await
    }

    pub async fn delete_session(&self, id: &str, user_id: &str) -> AppResult<()> {
        let deleted = self.repository.delete_owned(id, user_id).await?;
        if !deleted {
            return Err(AppError::NotFound("Study session not found".to_string()));
        }
        Ok(())
    }
}
