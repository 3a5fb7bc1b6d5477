use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context};

use super::TimeoutConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";
const DEFAULT_LEADERBOARD_TTL_SECS: u64 = 30;
const MAX_LEADERBOARD_TTL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 168;
const DEV_JWT_SECRET: &str = "hypd-dev-secret-change-me";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
    None,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub backend: CacheBackend,
    pub redis_url: Option<String>,
    pub leaderboard_ttl: Duration,
    pub connect_timeout: Duration,
    pub operation_timeout: Duration,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .finish()
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    pub cache: CacheConfig,
    pub auth: AuthConfig,
    pub timeouts: TimeoutConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("HYPD_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("HYPD_BIND_ADDR must be a socket address")?;

        let data_dir = default_data_dir();
        let database_path = var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("hypd.db"));
        let log_dir = var("HYPD_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("logs"));

        let timeouts = TimeoutConfig::default();
        let redis_url = var("REDIS_URL");
        let backend = match var("CACHE_BACKEND").map(|v| v.to_lowercase()) {
            Some(v) if v == "redis" => CacheBackend::Redis,
            Some(v) if v == "memory" => CacheBackend::Memory,
            Some(v) if v == "none" => CacheBackend::None,
            Some(other) => return Err(anyhow!("Unknown CACHE_BACKEND: {other}")),
            None if redis_url.is_some() => CacheBackend::Redis,
            None => CacheBackend::None,
        };
        let leaderboard_ttl_secs = match var("LEADERBOARD_CACHE_TTL_SECS") {
            Some(v) => v
                .parse::<u64>()
                .context("LEADERBOARD_CACHE_TTL_SECS must be a whole number of seconds")?,
            None => DEFAULT_LEADERBOARD_TTL_SECS,
        };
        if leaderboard_ttl_secs > MAX_LEADERBOARD_TTL_SECS {
            log::warn!(
                "LEADERBOARD_CACHE_TTL_SECS={} exceeds {}, capping",
                leaderboard_ttl_secs,
                MAX_LEADERBOARD_TTL_SECS
            );
        }
        let leaderboard_ttl_secs = leaderboard_ttl_secs.min(MAX_LEADERBOARD_TTL_SECS);

        let jwt_secret = match var("JWT_SECRET") {
            Some(secret) => secret,
            None if cfg!(debug_assertions) => {
                log::warn!("JWT_SECRET not set, using development secret");
                DEV_JWT_SECRET.to_string()
            }
            None => return Err(anyhow!("JWT_SECRET must be set in release builds")),
        };
        let token_ttl_hours = match var("JWT_EXPIRATION_HOURS") {
            Some(v) => v
                .parse::<i64>()
                .context("JWT_EXPIRATION_HOURS must be an integer")?,
            None => DEFAULT_JWT_EXPIRATION_HOURS,
        };
        if token_ttl_hours <= 0 {
            return Err(anyhow!("JWT_EXPIRATION_HOURS must be positive"));
        }

        Ok(Self {
            bind_addr,
            database_path,
            log_dir,
            cache: CacheConfig {
                backend,
                redis_url,
                leaderboard_ttl: Duration::from_secs(leaderboard_ttl_secs),
                connect_timeout: timeouts.cache_connect,
                operation_timeout: timeouts.cache_operation,
            },
            auth: AuthConfig {
                jwt_secret,
                token_ttl_hours,
            },
            timeouts,
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hypd")
}
