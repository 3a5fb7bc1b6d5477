use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use hypd_domain::shared::GameId;
use serde::Deserialize;

use crate::application::commands::auth_commands::{LoginCommand, RegisterUserCommand};
use crate::application::commands::game_commands::{SaveGameCommand, UnsaveGameCommand};
use crate::application::commands::CommandHandler;
use crate::application::dtos::{AuthResponseDto, LoginResponseDto, SavedGamesDto, UserDto};
use crate::presentation::error::ApiError;
use crate::presentation::extract::{ApiJson, AuthUser};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

pub(super) fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .route(
            "/auth/save-game/:game_id",
            post(save_game).delete(unsave_game),
        )
}

async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<Json<AuthResponseDto>, ApiError> {
    let result = state
        .command_handlers
        .register_user
        .handle(RegisterUserCommand {
            username: body.username,
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(AuthResponseDto {
        access_token: result.access_token,
        user: result.user,
    }))
}

async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponseDto>, ApiError> {
    let result = state
        .command_handlers
        .login
        .handle(LoginCommand {
            email: body.email,
            password: body.password,
            today: Utc::now().date_naive(),
        })
        .await?;

    Ok(Json(LoginResponseDto {
        access_token: result.access_token,
        user: result.user,
        points_earned: result.points_earned,
    }))
}

async fn me(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserDto>, ApiError> {
    Ok(Json(state.queries.user.to_dto(&user).await?))
}

async fn save_game(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(game_id): Path<String>,
) -> Result<Json<SavedGamesDto>, ApiError> {
    let saved = state
        .command_handlers
        .saved_games
        .handle(SaveGameCommand {
            user_id: user.id().clone(),
            game_id: GameId::from_string(&game_id),
        })
        .await?;
    Ok(Json(SavedGamesDto::new(&saved)))
}

async fn unsave_game(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(game_id): Path<String>,
) -> Result<Json<SavedGamesDto>, ApiError> {
    let saved = state
        .command_handlers
        .saved_games
        .handle(UnsaveGameCommand {
            user_id: user.id().clone(),
            game_id: GameId::from_string(&game_id),
        })
        .await?;
    Ok(Json(SavedGamesDto::new(&saved)))
}
