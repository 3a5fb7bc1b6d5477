use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use hypd_domain::shared::{DomainError, GameId, UserId};
use hypd_domain::streak::LoginStreak;
use hypd_domain::user::{User, UserRepository};

use crate::persistence::repository_base::{sql_limit, to_unsigned, TotalRow};
use crate::persistence::SqliteRepositoryBase;

const USER_COLUMNS: &str = "id, username, email, password_hash, is_admin, is_banned, \
     login_streak, best_login_streak, last_login_date, total_login_days, streak_points, created_at";

#[derive(FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    password_hash: String,
    is_admin: bool,
    is_banned: bool,
    login_streak: i64,
    best_login_streak: i64,
    last_login_date: Option<NaiveDate>,
    total_login_days: i64,
    streak_points: i64,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, DomainError> {
        let streak = LoginStreak::restore(
            to_unsigned(self.login_streak, "login_streak")?,
            to_unsigned(self.best_login_streak, "best_login_streak")?,
            self.last_login_date,
            to_unsigned(self.total_login_days, "total_login_days")?,
            to_unsigned(self.streak_points, "streak_points")?,
        );

        Ok(User::restore(
            UserId::from_string(&self.id),
            self.username,
            self.email,
            self.password_hash,
            self.is_admin,
            self.is_banned,
            streak,
            self.created_at,
        ))
    }
}

#[derive(FromRow)]
struct SavedGameRow {
    game_id: String,
}

pub struct SqliteUserRepository {
    base: SqliteRepositoryBase,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }

    async fn find_one(
        &self,
        column: &str,
        value: &str,
        context: &str,
    ) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = ?1");

        let row: Option<UserRow> = self
            .base
            .fetch_optional(sqlx::query_as(&query).bind(value), context)
            .await?;

        row.map(UserRow::into_user).transpose()
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO users (
                id, username, email, password_hash, is_admin, is_banned,
                login_streak, best_login_streak, last_login_date, total_login_days, streak_points,
                created_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
        "#;

        let streak = user.streak();
        self.base
            .execute(
                sqlx::query(query)
                    .bind(user.id().as_str())
                    .bind(user.username())
                    .bind(user.email())
                    .bind(user.password_hash())
                    .bind(user.is_admin())
                    .bind(user.is_banned())
                    .bind(i64::from(streak.login_streak()))
                    .bind(i64::from(streak.best_login_streak()))
                    .bind(streak.last_login_date())
                    .bind(i64::from(streak.total_login_days()))
                    .bind(streak_points_column(streak)?)
                    .bind(user.created_at()),
                "Create user",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.find_one("id", id.as_str(), "Find user by ID").await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = email.trim().to_lowercase();
        self.find_one("email", &email, "Find user by email").await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.find_one("username", username.trim(), "Find user by username")
            .await
    }

    async fn save_streak(&self, id: &UserId, streak: &LoginStreak) -> Result<(), DomainError> {
        let query = r#"
            UPDATE users SET
                login_streak = ?2,
                best_login_streak = ?3,
                last_login_date = ?4,
                total_login_days = ?5,
                streak_points = ?6
            WHERE id = ?1
        "#;

        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(id.as_str())
                    .bind(i64::from(streak.login_streak()))
                    .bind(i64::from(streak.best_login_streak()))
                    .bind(streak.last_login_date())
                    .bind(i64::from(streak.total_login_days()))
                    .bind(streak_points_column(streak)?),
                "Save login streak",
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id.to_string()));
        }

        Ok(())
    }

    async fn top_by_login_streak(&self, limit: usize) -> Result<Vec<User>, DomainError> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE is_banned = 0 \
             ORDER BY login_streak DESC, best_login_streak DESC, username ASC \
             LIMIT ?1"
        );

        let rows: Vec<UserRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(sql_limit(limit)),
                "Top users by login streak",
            )
            .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row: TotalRow = self
            .base
            .fetch_one(
                sqlx::query_as("SELECT COUNT(*) AS total FROM users"),
                "Count users",
            )
            .await?;

        to_unsigned(row.total, "users")
    }

    async fn saved_games(&self, id: &UserId) -> Result<Vec<GameId>, DomainError> {
        let rows: Vec<SavedGameRow> = self
            .base
            .fetch_all(
                sqlx::query_as(
                    "SELECT game_id FROM saved_games WHERE user_id = ?1 ORDER BY saved_at, rowid",
                )
                .bind(id.as_str()),
                "Find saved games",
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| GameId::from_string(&r.game_id))
            .collect())
    }

    async fn save_game(&self, id: &UserId, game_id: &GameId) -> Result<(), DomainError> {
        self.base
            .execute(
                sqlx::query(
                    "INSERT INTO saved_games (user_id, game_id, saved_at) VALUES (?1, ?2, ?3) \
                     ON CONFLICT(user_id, game_id) DO NOTHING",
                )
                .bind(id.as_str())
                .bind(game_id.as_str())
                .bind(Utc::now()),
                "Save game",
            )
            .await?;

        Ok(())
    }

    async fn unsave_game(&self, id: &UserId, game_id: &GameId) -> Result<(), DomainError> {
        self.base
            .execute(
                sqlx::query("DELETE FROM saved_games WHERE user_id = ?1 AND game_id = ?2")
                    .bind(id.as_str())
                    .bind(game_id.as_str()),
                "Unsave game",
            )
            .await?;

        Ok(())
    }
}

fn streak_points_column(streak: &LoginStreak) -> Result<i64, DomainError> {
    i64::try_from(streak.streak_points()).map_err(|_| {
        DomainError::DataIntegrity(format!(
            "Streak points {} exceed storable range",
            streak.streak_points()
        ))
    })
}
