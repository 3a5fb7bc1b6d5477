use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::presentation::state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    cache: CacheHealth,
}

#[derive(Debug, Serialize)]
struct CacheHealth {
    backend: &'static str,
    status: &'static str,
}

pub(super) fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

/// Liveness with database and cache checks. Only the database decides the
/// status code; a missing cache is reported but the service stays up.
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.runtime.db.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            warn!(error = %e, "Health check: database unreachable");
            "disconnected"
        }
    };

    let cache = state.runtime.cache.as_ref();
    let cache_status = if cache.backend() == "none" {
        "disabled"
    } else {
        match cache.ping().await {
            Ok(()) => "connected",
            Err(e) => {
                warn!(error = %e, "Health check: cache unreachable");
                "disconnected"
            }
        }
    };

    let (code, status) = if database == "connected" {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            cache: CacheHealth {
                backend: cache.backend(),
                status: cache_status,
            },
        }),
    )
}
