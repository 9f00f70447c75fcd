use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::QuizResult,
        dto::{request::SaveQuizResultRequest, response::QuizResultWithSessionDto},
    },
    repositories::{QuizResultRepository, StudySessionRepository},
};

pub struct QuizResultService {
    repository: Arc<dyn QuizResultRepository>,
    session_repository: Arc<dyn StudySessionRepository>,
}

impl QuizResultService {
    pub fn new(
        repository: Arc<dyn QuizResultRepository>,
        session_repository: Arc<dyn StudySessionRepository>,
    ) -> Self {
        Self {
            repository,
            session_repository,
        }
    }

    /// Write-once record of a completed quiz. The session must exist and
    /// belong to the requester.
    pub async fn save_result(
        &self,
        user_id: &str,
        request: SaveQuizResultRequest,
    ) -> AppResult<QuizResult> {
        self.session_repository
            .find_owned(&request.session_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Study session not found".to_string()))?;

        let result = QuizResult::new(
            user_id,
            &request.session_id,
            request.total_questions,
            request.correct_answers,
            request.score_percentage,
            request.time_taken_seconds,
        );

        let created = self.repository.create(result).await?;
        Ok(created)
    }

    /// Caller's results joined with the subject and difficulty of the
    /// session each was taken against, newest first. Results whose session
    /// has since been deleted are skipped.
    pub async fn list_results(&self, user_id: &str) -> AppResult<Vec<QuizResultWithSessionDto>> {
        let results = self.repository.list_by_user(user_id).await?;

        let mut rows = Vec::with_capacity(results.len());
        for result in results {
            let Some(session) = self
                .session_repository
                .find_owned(&result.session_id, user_id)
                .await?
            else {
                continue;
            };

            rows.push(QuizResultWithSessionDto {
                result: result.into(),
                subject: session.subject,
                difficulty: session.difficulty,
            });
        }

        Ok(rows)
    }
}
