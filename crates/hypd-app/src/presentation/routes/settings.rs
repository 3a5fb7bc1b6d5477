use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use hypd_domain::settings::Settings;
use serde::Serialize;
use tracing::info;

use crate::application::commands::settings_commands::UpdateSettingsCommand;
use crate::application::commands::CommandHandler;
use crate::presentation::error::ApiError;
use crate::presentation::extract::{AdminUser, ApiJson};
use crate::presentation::state::AppState;

#[derive(Debug, Serialize)]
struct UpdateSettingsResponse {
    success: bool,
}

pub(super) fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/settings", get(get_settings))
        .route("/admin/settings", post(update_settings))
}

async fn get_settings(State(state): State<Arc<AppState>>) -> Result<Json<Settings>, ApiError> {
    Ok(Json(state.queries.settings.get_settings().await?))
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    AdminUser(admin): AdminUser,
    ApiJson(settings): ApiJson<Settings>,
) -> Result<Json<UpdateSettingsResponse>, ApiError> {
    let keys = settings.len();
    state
        .command_handlers
        .update_settings
        .handle(UpdateSettingsCommand { settings })
        .await?;
    info!(admin = admin.username(), keys, "Admin updated settings");
    Ok(Json(UpdateSettingsResponse { success: true }))
}
