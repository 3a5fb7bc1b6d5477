use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use hypd_domain::cache::{CacheClient, CacheEntry, CacheError};
use tokio::sync::RwLock;

/// Per-process TTL cache. Expired entries are dropped lazily on read.
#[derive(Default)]
pub struct InMemoryCacheClient {
    entries: RwLock<HashMap<String, CacheEntry>>,
    counters: RwLock<HashMap<String, u64>>,
}

impl InMemoryCacheClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl CacheClient for InMemoryCacheClient {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.is_fresh_at(now) => return Ok(Some(entry.payload.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|entry| !entry.is_fresh_at(now)) {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, payload: &str, ttl: Duration) -> Result<(), CacheError> {
        let entry = CacheEntry::new(key, payload, ttl);
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        // Versioned keys are never read again once superseded, so sweep here.
        entries.retain(|_, existing| existing.is_fresh_at(now));
        entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn counter(&self, key: &str) -> Result<u64, CacheError> {
        Ok(self.counters.read().await.get(key).copied().unwrap_or(0))
    }

    async fn incr(&self, key: &str) -> Result<u64, CacheError> {
        let mut counters = self.counters.write().await;
        let value = counters.entry(key.to_string()).or_insert(0);
        *value = value.saturating_add(1);
        Ok(*value)
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }
}
