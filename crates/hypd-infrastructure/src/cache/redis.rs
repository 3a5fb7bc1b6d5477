use std::future::Future;
use std::time::Duration;

use ::redis::aio::ConnectionManager;
use ::redis::{AsyncCommands, Client, RedisResult};
use async_trait::async_trait;
use hypd_domain::cache::{CacheClient, CacheError};

/// Redis-backed cache. Every command is bounded by `operation_timeout`.
#[derive(Clone)]
pub struct RedisCacheClient {
    connection: ConnectionManager,
    operation_timeout: Duration,
}

impl RedisCacheClient {
    pub async fn connect(
        redis_url: &str,
        connect_timeout: Duration,
        operation_timeout: Duration,
    ) -> Result<Self, CacheError> {
        let client = Client::open(redis_url).map_err(|e| CacheError::Unavailable(e.to_string()))?;

        let connection = tokio::time::timeout(connect_timeout, client.get_connection_manager())
            .await
            .map_err(|_| CacheError::Timeout(connect_timeout))?
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;

        let cache = Self {
            connection,
            operation_timeout,
        };
        cache.ping().await?;
        Ok(cache)
    }

    async fn bounded<T, F>(&self, command: F) -> Result<T, CacheError>
    where
        F: Future<Output = RedisResult<T>>,
    {
        tokio::time::timeout(self.operation_timeout, command)
            .await
            .map_err(|_| CacheError::Timeout(self.operation_timeout))?
            .map_err(|e| CacheError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl CacheClient for RedisCacheClient {
    fn backend(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection.clone();
        self.bounded(async move { conn.get::<_, Option<String>>(key).await })
            .await
    }

    async fn set(&self, key: &str, payload: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        // SETEX rejects a zero expiry.
        let seconds = ttl.as_secs().max(1);
        self.bounded(async move { conn.set_ex::<_, _, ()>(key, payload, seconds).await })
            .await
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        self.bounded(async move { conn.del::<_, ()>(key).await })
            .await
    }

    async fn counter(&self, key: &str) -> Result<u64, CacheError> {
        let mut conn = self.connection.clone();
        let value = self
            .bounded(async move { conn.get::<_, Option<u64>>(key).await })
            .await?;
        Ok(value.unwrap_or(0))
    }

    async fn incr(&self, key: &str) -> Result<u64, CacheError> {
        let mut conn = self.connection.clone();
        self.bounded(async move { conn.incr::<_, _, u64>(key, 1u64).await })
            .await
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        let _: String = self
            .bounded(async move { ::redis::cmd("PING").query_async(&mut conn).await })
            .await?;
        Ok(())
    }
}
