mod admin;
mod analytics;
mod auth;
mod games;
mod health;
mod leaderboard;
mod settings;
mod streak;

use std::sync::Arc;

use axum::Router;
use hypd_domain::leaderboard::LEADERBOARD_CAPACITY;
use serde::Deserialize;

use crate::presentation::http::apply_standard_layers;
use crate::presentation::state::AppState;

/// The full `/api` router with the standard middleware stack.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(streak::router())
        .merge(leaderboard::router())
        .merge(games::router())
        .merge(admin::router())
        .merge(analytics::router())
        .merge(settings::router());

    let router = Router::new().nest("/api", api).with_state(state.clone());
    apply_standard_layers(router, &state.runtime.config.timeouts)
}

/// `?limit=N` on ranking endpoints.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LimitParams {
    pub limit: Option<i64>,
}

impl LimitParams {
    /// Requested limit clamped to `1..=LEADERBOARD_CAPACITY`.
    pub fn resolve(&self, default: usize) -> usize {
        match self.limit {
            None => default,
            Some(limit) => limit.clamp(1, LEADERBOARD_CAPACITY as i64) as usize,
        }
    }
}
