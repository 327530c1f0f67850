use crate::local_store;
use async_trait::async_trait;
use motive_core::{error::Result, storage::LocalStore};
use sqlx::SqlitePool;

/// `LocalStore` backed by the `local_store` table
#[derive(Debug, Clone)]
pub struct SqliteLocalStore {
    pool: SqlitePool,
}

impl SqliteLocalStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect, run pending migrations and wrap the pool
    pub async fn open(database_url: &str) -> crate::error::Result<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl LocalStore for SqliteLocalStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(local_store::get_item(&self.pool, key).await?)
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Ok(local_store::set_item(&self.pool, key, value).await?)
    }

    async fn remove_item(&self, key: &str) -> Result<bool> {
        Ok(local_store::remove_item(&self.pool, key).await?)
    }
}
