//! Redis-backed store for short-lived verification data

use redis::{AsyncCommands, Client};

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct CodeStore {
    client: Client,
}

impl CodeStore {
    /// Build a client without touching the server
    pub fn open(url: &str) -> AppResult<Self> {
        let client = Client::open(url)
            .map_err(|e| AppError::Internal(format!("Failed to create Redis client: {}", e)))?;
        Ok(Self { client })
    }

    /// Build a client and check the server answers
    pub async fn connect(url: &str) -> AppResult<Self> {
        let store = Self::open(url)?;
        store.ping().await?;
        Ok(store)
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to get Redis connection: {}", e)))
    }

    pub async fn ping(&self) -> AppResult<()> {
        let mut conn = self.connection().await?;
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("Redis connection test failed: {}", e)))?;
        Ok(())
    }

    /// Store a value under `key`, replacing any previous one
    pub async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> AppResult<()> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl_seconds)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store {} in Redis: {}", key, e)))?;
        Ok(())
    }

    /// `None` once the entry expired or was consumed
    pub async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.connection().await?;
        conn.get(key)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read {} from Redis: {}", key, e)))
    }

    pub async fn delete(&self, key: &str) -> AppResult<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to delete {} from Redis: {}", key, e)))?;
        Ok(())
    }
}
