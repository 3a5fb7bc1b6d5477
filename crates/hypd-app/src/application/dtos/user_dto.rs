use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hypd_domain::leaderboard::HighScores;
use hypd_domain::shared::GameId;
use hypd_domain::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub saved_games: Vec<String>,
    pub high_scores: HighScores,
    pub created_at: DateTime<Utc>,
    pub login_streak: u32,
    pub best_login_streak: u32,
    pub total_login_days: u32,
    pub streak_points: u64,
    pub last_login_date: Option<String>, // YYYY-MM-DD
}

impl UserDto {
    pub fn from_user(user: &User, saved_games: &[GameId], high_scores: HighScores) -> Self {
        let streak = user.streak();
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            is_admin: user.is_admin(),
            saved_games: saved_games.iter().map(GameId::to_string).collect(),
            high_scores,
            created_at: user.created_at(),
            login_streak: streak.login_streak(),
            best_login_streak: streak.best_login_streak(),
            total_login_days: streak.total_login_days(),
            streak_points: streak.streak_points(),
            last_login_date: streak
                .last_login_date()
                .map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub access_token: String,
    pub user: UserDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponseDto {
    pub access_token: String,
    pub user: UserDto,
    pub points_earned: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGamesDto {
    pub saved_games: Vec<String>,
}

impl SavedGamesDto {
    pub fn new(saved_games: &[GameId]) -> Self {
        Self {
            saved_games: saved_games.iter().map(GameId::to_string).collect(),
        }
    }
}
