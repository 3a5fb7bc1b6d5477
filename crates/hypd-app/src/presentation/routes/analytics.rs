use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use hypd_domain::shared::GameId;
use serde::{Deserialize, Serialize};

use crate::application::commands::score_commands::RecordPlaySessionCommand;
use crate::application::commands::CommandHandler;
use crate::presentation::error::ApiError;
use crate::presentation::extract::{ApiJson, OptionalAuthUser};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
struct PlaySessionRequest {
    game_id: String,
    #[serde(default)]
    duration_seconds: i64,
    score: Option<i64>,
}

#[derive(Debug, Serialize)]
struct SuccessResponse {
    success: bool,
}

pub(super) fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analytics/play-session", post(record_play_session))
}

async fn record_play_session(
    State(state): State<Arc<AppState>>,
    OptionalAuthUser(user): OptionalAuthUser,
    ApiJson(body): ApiJson<PlaySessionRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .command_handlers
        .record_play_session
        .handle(RecordPlaySessionCommand {
            user_id: user.map(|u| u.id().clone()),
            game_id: GameId::from_string(&body.game_id),
            duration_seconds: body.duration_seconds,
            score: body.score,
        })
        .await?;
    Ok(Json(SuccessResponse { success: true }))
}
