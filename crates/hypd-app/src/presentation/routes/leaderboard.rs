use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use hypd_domain::leaderboard::{LeaderboardEntry, LeaderboardScope};
use hypd_domain::shared::GameId;
use serde::Deserialize;

use super::LimitParams;
use crate::application::commands::score_commands::SubmitScoreCommand;
use crate::application::commands::CommandHandler;
use crate::application::dtos::{LeaderboardDto, ScoreSubmissionDto};
use crate::application::queries::DEFAULT_LEADERBOARD_LIMIT;
use crate::presentation::error::ApiError;
use crate::presentation::extract::{ApiJson, ApiQuery, AuthUser};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
struct SubmitScoreRequest {
    game_id: String,
    score: i64,
    #[serde(default)]
    play_time: i64,
}

pub(super) fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/leaderboard/submit", post(submit_score))
        .route("/leaderboard/global", get(global_leaderboard))
        .route("/leaderboard/game/:game_id", get(game_leaderboard))
}

async fn submit_score(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    ApiJson(body): ApiJson<SubmitScoreRequest>,
) -> Result<Json<ScoreSubmissionDto>, ApiError> {
    let submission = state
        .command_handlers
        .submit_score
        .handle(SubmitScoreCommand {
            user_id: user.id().clone(),
            game_id: GameId::from_string(&body.game_id),
            score: body.score,
            play_time: body.play_time,
        })
        .await?;
    Ok(Json(submission.into()))
}

async fn global_leaderboard(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<Json<LeaderboardDto<LeaderboardEntry>>, ApiError> {
    let entries = state
        .queries
        .leaderboard
        .get_leaderboard(
            &LeaderboardScope::Global,
            params.resolve(DEFAULT_LEADERBOARD_LIMIT),
        )
        .await?;
    Ok(Json(LeaderboardDto::new(entries)))
}

async fn game_leaderboard(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<Json<LeaderboardDto<LeaderboardEntry>>, ApiError> {
    let scope = LeaderboardScope::Game(GameId::from_string(&game_id));
    let entries = state
        .queries
        .leaderboard
        .get_leaderboard(&scope, params.resolve(DEFAULT_LEADERBOARD_LIMIT))
        .await?;
    Ok(Json(LeaderboardDto::new(entries)))
}
