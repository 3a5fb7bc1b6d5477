//! Cache backends behind the domain [`CacheClient`] port.

mod memory;
mod noop;
mod redis;

pub use self::memory::InMemoryCacheClient;
pub use self::noop::NoopCacheClient;
pub use self::redis::RedisCacheClient;

use std::sync::Arc;

use hypd_domain::cache::CacheClient;
use tracing::{info, warn};

use crate::config::{CacheBackend, CacheConfig};

/// Build the configured cache client.
///
/// An unreachable Redis never blocks startup: it falls back to the no-op client.
pub async fn build_cache_client(config: &CacheConfig) -> Arc<dyn CacheClient> {
    match (&config.backend, config.redis_url.as_deref()) {
        (CacheBackend::Memory, _) => {
            info!(target: "hypd::cache", "Using in-process cache");
            Arc::new(InMemoryCacheClient::new())
        }
        (CacheBackend::Redis, Some(url)) => {
            match RedisCacheClient::connect(url, config.connect_timeout, config.operation_timeout)
                .await
            {
                Ok(client) => {
                    info!(target: "hypd::cache", "Connected to Redis cache");
                    Arc::new(client)
                }
                Err(e) => {
                    warn!(target: "hypd::cache", error = %e, "Redis unavailable, caching disabled");
                    Arc::new(NoopCacheClient)
                }
            }
        }
        (CacheBackend::Redis, None) => {
            warn!(target: "hypd::cache", "CACHE_BACKEND=redis without REDIS_URL, caching disabled");
            Arc::new(NoopCacheClient)
        }
        (CacheBackend::None, _) => {
            info!(target: "hypd::cache", "Caching disabled");
            Arc::new(NoopCacheClient)
        }
    }
}
