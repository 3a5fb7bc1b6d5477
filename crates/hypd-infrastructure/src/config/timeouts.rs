use std::time::Duration;

/// Configuration for various timeout durations across the application
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Establishing the cache connection at startup
    pub cache_connect: Duration,

    /// A single cache command
    pub cache_operation: Duration,

    /// Whole HTTP request, enforced by the router
    pub http_request: Duration,

    /// Graceful shutdown drain window
    pub shutdown_grace: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            cache_connect: Duration::from_secs(2),
            cache_operation: Duration::from_millis(250),
            http_request: Duration::from_secs(30),
            shutdown_grace: Duration::from_secs(10),
        }
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
