use std::sync::Arc;

use hypd_app::presentation::{build_router, http, AppState};
use hypd_infrastructure::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    match hypd_infrastructure::logging::init_logger(&config.log_dir) {
        Ok(()) => {
            tracing::info!("🚀 Hypd server starting...");
            tracing::info!("📝 File logging initialized at: {}", config.log_dir.display());
        }
        Err(e) => {
            eprintln!("⚠️  Failed to initialize file logging: {}", e);
            eprintln!("   Falling back to console logging only");

            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .try_init();
        }
    }

    tracing::info!(
        bind_addr = %config.bind_addr,
        cache_backend = ?config.cache.backend,
        "Configuration loaded"
    );

    let bind_addr = config.bind_addr;
    let grace = config.timeouts.shutdown_grace;
    let state = Arc::new(AppState::new(config).await?);

    http::serve(bind_addr, build_router(state), grace).await?;

    tracing::info!("Server stopped");
    Ok(())
}
