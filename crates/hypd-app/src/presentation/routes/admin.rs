use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get, patch};
use axum::{Json, Router};
use chrono::Utc;
use hypd_domain::game::GameDraft;
use hypd_domain::shared::GameId;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::commands::game_commands::{
    CreateGameCommand, DeleteGameCommand, SetGameVisibilityCommand,
};
use crate::application::commands::CommandHandler;
use crate::application::dtos::{AnalyticsOverviewDto, GameDto};
use crate::presentation::error::ApiError;
use crate::presentation::extract::{AdminUser, ApiJson};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
struct VisibilityRequest {
    #[serde(default = "visible_by_default")]
    is_visible: bool,
}

fn visible_by_default() -> bool {
    true
}

#[derive(Debug, Serialize)]
struct VisibilityResponse {
    success: bool,
    is_visible: bool,
}

#[derive(Debug, Serialize)]
struct DeleteGameResponse {
    success: bool,
    deleted_id: String,
}

pub(super) fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/games", get(list_all_games).post(create_game))
        .route("/admin/games/:game_id", delete(delete_game))
        .route("/admin/games/:game_id/visibility", patch(set_visibility))
        .route("/admin/analytics/overview", get(analytics_overview))
}

async fn list_all_games(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<GameDto>>, ApiError> {
    Ok(Json(state.queries.game.list_all_games().await?))
}

async fn create_game(
    State(state): State<Arc<AppState>>,
    AdminUser(admin): AdminUser,
    ApiJson(draft): ApiJson<GameDraft>,
) -> Result<Json<GameDto>, ApiError> {
    let game = state
        .command_handlers
        .create_game
        .handle(CreateGameCommand { draft })
        .await?;
    info!(admin = admin.username(), game_id = %game.id, "Admin created game");
    Ok(Json(game))
}

async fn delete_game(
    State(state): State<Arc<AppState>>,
    AdminUser(admin): AdminUser,
    Path(game_id): Path<String>,
) -> Result<Json<DeleteGameResponse>, ApiError> {
    let deleted = state
        .command_handlers
        .delete_game
        .handle(DeleteGameCommand {
            game_id: GameId::from_string(&game_id),
        })
        .await?;
    info!(admin = admin.username(), game_id = %deleted, "Admin deleted game");
    Ok(Json(DeleteGameResponse {
        success: true,
        deleted_id: deleted.to_string(),
    }))
}

async fn set_visibility(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
    Path(game_id): Path<String>,
    ApiJson(body): ApiJson<VisibilityRequest>,
) -> Result<Json<VisibilityResponse>, ApiError> {
    let is_visible = state
        .command_handlers
        .set_game_visibility
        .handle(SetGameVisibilityCommand {
            game_id: GameId::from_string(&game_id),
            is_visible: body.is_visible,
        })
        .await?;
    Ok(Json(VisibilityResponse {
        success: true,
        is_visible,
    }))
}

async fn analytics_overview(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<AnalyticsOverviewDto>, ApiError> {
    Ok(Json(state.queries.analytics.overview(Utc::now()).await?))
}
