//! Key-value cache port.
//!
//! Implementations live in the infrastructure crate. Callers treat every
//! [`CacheError`] as a miss (reads) or a logged no-op (writes).

use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::shared::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache unavailable: {0}")]
    Unavailable(String),

    #[error("cache operation timed out after {0:?}")]
    Timeout(Duration),
}

impl From<CacheError> for DomainError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::Unavailable(_) => DomainError::CacheUnavailable(err.to_string()),
            CacheError::Timeout(_) => DomainError::Timeout(err.to_string()),
        }
    }
}

/// Expiry used when `now + ttl` does not fit in an [`Instant`].
const FALLBACK_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Short backend name reported by the health check.
    fn backend(&self) -> &'static str;

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    async fn set(&self, key: &str, payload: &str, ttl: Duration) -> Result<(), CacheError>;
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Current value of a persistent counter, 0 when unset. Counters never expire.
    async fn counter(&self, key: &str) -> Result<u64, CacheError>;
    /// Atomically add one to a counter and return the new value.
    async fn incr(&self, key: &str) -> Result<u64, CacheError>;

    async fn ping(&self) -> Result<(), CacheError>;
}

/// A cached payload with its absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub key: String,
    pub payload: String,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn new(key: impl Into<String>, payload: impl Into<String>, ttl: Duration) -> Self {
        let now = Instant::now();
        let expires_at = now
            .checked_add(ttl)
            .or_else(|| now.checked_add(FALLBACK_TTL))
            .unwrap_or(now);
        Self {
            key: key.into(),
            payload: payload.into(),
            expires_at,
        }
    }

    pub fn is_fresh_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }

    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(Instant::now())
    }
}
