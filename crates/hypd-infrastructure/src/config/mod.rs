mod app_config;
mod timeouts;

pub use app_config::{AppConfig, AuthConfig, CacheBackend, CacheConfig};
pub use timeouts::TimeoutConfig;
