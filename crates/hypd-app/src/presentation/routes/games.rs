use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::CACHE_CONTROL;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use hypd_domain::shared::GameId;
use serde::Deserialize;

use crate::application::dtos::{CategoriesDto, GameDto};
use crate::presentation::error::ApiError;
use crate::presentation::extract::ApiQuery;
use crate::presentation::state::AppState;

const META_MAX_AGE: &str = "public, max-age=300";

#[derive(Debug, Default, Deserialize)]
struct GameListParams {
    category: Option<String>,
}

pub(super) fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/games", get(list_games))
        .route("/games/:game_id", get(get_game))
        .route("/games/:game_id/meta", get(get_game_meta))
        .route("/categories", get(list_categories))
}

async fn list_games(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<GameListParams>,
) -> Result<Json<Vec<GameDto>>, ApiError> {
    let games = state
        .queries
        .game
        .list_games(params.category.as_deref())
        .await?;
    Ok(Json(games))
}

async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
) -> Result<Json<GameDto>, ApiError> {
    let game = state
        .queries
        .game
        .get_game(&GameId::from_string(&game_id))
        .await?;
    Ok(Json(game))
}

/// Small payload for link previews, cacheable for longer than the catalog.
async fn get_game_meta(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let meta = state
        .queries
        .game
        .get_game_meta(&GameId::from_string(&game_id))
        .await?;
    Ok(([(CACHE_CONTROL, META_MAX_AGE)], Json(meta)))
}

async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesDto>, ApiError> {
    let categories = state.queries.game.categories().await?;
    Ok(Json(CategoriesDto { categories }))
}
