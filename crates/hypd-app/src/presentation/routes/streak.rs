use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use super::LimitParams;
use crate::application::dtos::{LeaderboardDto, StreakLeaderboardEntryDto, StreakStatusDto};
use crate::application::queries::DEFAULT_STREAK_LEADERBOARD_LIMIT;
use crate::presentation::error::ApiError;
use crate::presentation::extract::{ApiQuery, AuthUser};
use crate::presentation::state::AppState;

pub(super) fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user/streak", get(streak_status))
        .route("/user/streak/leaderboard", get(streak_leaderboard))
}

async fn streak_status(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<Json<StreakStatusDto>, ApiError> {
    let status = state
        .queries
        .streak
        .get_streak_status(user.id(), Utc::now().date_naive())
        .await?;
    Ok(Json(status))
}

async fn streak_leaderboard(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<Json<LeaderboardDto<StreakLeaderboardEntryDto>>, ApiError> {
    let leaderboard = state
        .queries
        .streak
        .get_streak_leaderboard(params.resolve(DEFAULT_STREAK_LEADERBOARD_LIMIT))
        .await?;
    Ok(Json(LeaderboardDto { leaderboard }))
}
