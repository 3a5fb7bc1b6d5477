use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, warn};

use hypd_domain::cache::CacheClient;
use hypd_domain::leaderboard::{LeaderboardEntry, LeaderboardScope};

/// Outcome of a cache lookup for one scope.
#[derive(Debug)]
pub enum CachedLeaderboard {
    Hit(Vec<LeaderboardEntry>),
    /// Nothing cached for the current generation. Pass `generation` back to
    /// [`LeaderboardCache::put`] after recomputing.
    Miss { generation: u64 },
    /// The generation could not be read, so nothing may be stored.
    Unavailable,
}

impl CachedLeaderboard {
    pub fn hit(self) -> Option<Vec<LeaderboardEntry>> {
        match self {
            CachedLeaderboard::Hit(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Ranked leaderboard snapshots stored in the cache under their scope key.
///
/// Each scope has a generation counter and snapshots live under
/// `{scope key}:v{generation}`. Invalidation bumps the counter, so a reader
/// that computed from pre-write data can only ever store into a generation
/// nobody reads any more.
///
/// Cache failures never propagate: reads degrade to a miss and writes are
/// logged and dropped.
pub struct LeaderboardCache {
    client: Arc<dyn CacheClient>,
    ttl: Duration,
}

impl LeaderboardCache {
    pub fn new(client: Arc<dyn CacheClient>, ttl: Duration) -> Self {
        Self { client, ttl }
    }

    pub async fn get(&self, scope: &LeaderboardScope) -> CachedLeaderboard {
        let Some(generation) = self.generation(scope).await else {
            return CachedLeaderboard::Unavailable;
        };

        let key = snapshot_key(scope, generation);
        let payload = match self.client.get(&key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return CachedLeaderboard::Miss { generation },
            Err(e) => {
                warn!("[leaderboard] cache read failed key={} error={}", key, e);
                return CachedLeaderboard::Miss { generation };
            }
        };

        match serde_json::from_str(&payload) {
            Ok(entries) => {
                debug!("[leaderboard] cache hit key={}", key);
                CachedLeaderboard::Hit(entries)
            }
            Err(e) => {
                warn!("[leaderboard] discarding undecodable snapshot key={} error={}", key, e);
                CachedLeaderboard::Miss { generation }
            }
        }
    }

    /// Store a snapshot computed while `generation` was current. Skipped when
    /// the scope was invalidated in the meantime.
    pub async fn put(&self, scope: &LeaderboardScope, generation: u64, entries: &[LeaderboardEntry]) {
        if self.generation(scope).await != Some(generation) {
            debug!(
                "[leaderboard] skipping stale snapshot key={} generation={}",
                scope.cache_key(),
                generation
            );
            return;
        }

        let key = snapshot_key(scope, generation);
        let payload = match serde_json::to_string(entries) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("[leaderboard] failed to encode snapshot key={} error={}", key, e);
                return;
            }
        };

        if let Err(e) = self.client.set(&key, &payload, self.ttl).await {
            warn!("[leaderboard] cache write failed key={} error={}", key, e);
        }
    }

    /// Retire the cached snapshots of `scopes`. Failures are logged only.
    pub async fn invalidate(&self, scopes: &[LeaderboardScope]) {
        let bumps = scopes.iter().map(|scope| async move {
            let counter = generation_key(scope);
            match self.client.incr(&counter).await {
                Ok(generation) => {
                    // The superseded snapshot is unreachable now; free it early.
                    let previous = snapshot_key(scope, generation.saturating_sub(1));
                    if let Err(e) = self.client.delete(&previous).await {
                        debug!("[leaderboard] failed to drop key={} error={}", previous, e);
                    }
                }
                Err(e) => {
                    warn!("[leaderboard] cache invalidation failed key={} error={}", counter, e);
                }
            }
        });
        join_all(bumps).await;
    }

    async fn generation(&self, scope: &LeaderboardScope) -> Option<u64> {
        let counter = generation_key(scope);
        match self.client.counter(&counter).await {
            Ok(generation) => Some(generation),
            Err(e) => {
                warn!("[leaderboard] generation read failed key={} error={}", counter, e);
                None
            }
        }
    }
}

fn generation_key(scope: &LeaderboardScope) -> String {
    format!("{}:generation", scope.cache_key())
}

fn snapshot_key(scope: &LeaderboardScope, generation: u64) -> String {
    format!("{}:v{}", scope.cache_key(), generation)
}
