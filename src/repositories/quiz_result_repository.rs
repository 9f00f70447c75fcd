use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Collection};

use crate::{db::Database, errors::AppResult, models::domain::QuizResult};

#[async_trait]
pub trait QuizResultRepository: Send + Sync {
    async fn create(&self, result: QuizResult) -> AppResult<QuizResult>;
    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResult>>;
}

pub struct MongoQuizResultRepository {
    collection: Collection<QuizResult>,
}

impl MongoQuizResultRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_results");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_results collection");

        let user_index = mongodb::IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .build();
        self.collection.create_index(user_index).await?;

        log::info!("Successfully created indexes for quiz_results collection");
        Ok(())
    }
}

#[async_trait]
impl QuizResultRepository for MongoQuizResultRepository {
    async fn create(&self, result: QuizResult) -> AppResult<QuizResult> {
        self.collection.insert_one(&result).await?;
        Ok(result)
    }

    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResult>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .with_options(find_options)
            .await?;
        let results: Vec<QuizResult> = cursor.try_collect().await?;

        Ok(results)
    }
}
