use std::time::Duration;

use async_trait::async_trait;
use hypd_domain::cache::{CacheClient, CacheError};

/// Cache that stores nothing. Every read is a miss.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCacheClient;

#[async_trait]
impl CacheClient for NoopCacheClient {
    fn backend(&self) -> &'static str {
        "none"
    }

    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _payload: &str, _ttl: Duration) -> Result<(), CacheError> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Ok(())
    }

    async fn counter(&self, _key: &str) -> Result<u64, CacheError> {
        Ok(0)
    }

    async fn incr(&self, _key: &str) -> Result<u64, CacheError> {
        Ok(0)
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }
}
