use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::{config::Config, errors::AppResult};

const MIN_POOL_SIZE: u32 = 2;
const MAX_POOL_SIZE: u32 = 10;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Thin handle over the MongoDB client plus the configured database name.
/// Cloning is cheap; the underlying client is already pooled.
#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
}

impl Database {
    /// Connect and verify the server is reachable with a ping. Fails fast at
    /// startup instead of on the first query.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        options.min_pool_size = Some(MIN_POOL_SIZE);
        options.max_pool_size = Some(MAX_POOL_SIZE);
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);

        let client = Client::with_options(options)?;
        let db = Self {
            client,
            db_name: config.mongo_db_name.clone(),
        };
        db.health_check().await?;

        log::info!("Connected to MongoDB database '{}'", db.db_name);
        Ok(db)
    }

    pub fn get_collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client.database(&self.db_name).collection(name)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database(&self.db_name)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_handle_is_share_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }
}
