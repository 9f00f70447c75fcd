use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::StudySession};

/// Every read and delete is scoped by `user_id`; ownership checks live here
/// rather than in the handlers.
#[async_trait]
pub trait StudySessionRepository: Send + Sync {
    async fn create(&self, session: StudySession) -> AppResult<StudySession>;
    async fn find_owned(&self, id: &str, user_id: &str) -> AppResult<Option<StudySession>>;
    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<StudySession>>;
    async fn delete_owned(&self, id: &str, user_id: &str) -> AppResult<bool>;
}

pub struct MongoStudySessionRepository {
    collection: Collection<StudySession>,
}

impl MongoStudySessionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("study_sessions");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for study_sessions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(id_index).await?;

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .build();
        self.collection.create_index(user_index).await?;

        log::info!("Successfully created indexes for study_sessions collection");
        Ok(())
    }
}

#[async_trait]
impl StudySessionRepository for MongoStudySessionRepository {
    async fn create(&self, session: StudySession) -> AppResult<StudySession> {
        self.collection.insert_one(&session).await?;
        Ok(session)
    }

    async fn find_owned(&self, id: &str, user_id: &str) -> AppResult<Option<StudySession>> {
        let session = self
            .collection
            .find_one(doc! { "id": id, "user_id": user_id })
            .await?;
        Ok(session)
    }

    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<StudySession>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .with_options(find_options)
            .await?;
        let sessions: Vec<StudySession> = cursor.try_collect().await?;

        Ok(sessions)
    }

    async fn delete_owned(&self, id: &str, user_id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "id": id, "user_id": user_id })
            .await?;
        Ok(result.deleted_count > 0)
    }
}
