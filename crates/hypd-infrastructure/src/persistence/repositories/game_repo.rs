use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use hypd_domain::game::{Game, GameRepository};
use hypd_domain::shared::{DomainError, GameId};

use crate::persistence::repository_base::{to_unsigned, TotalRow};
use crate::persistence::SqliteRepositoryBase;

const GAME_COLUMNS: &str = "id, title, description, category, thumbnail_url, embed_url, \
     instructions, is_visible, play_count, created_at";

#[derive(FromRow)]
struct CategoryRow {
    category: String,
}

#[derive(FromRow)]
struct GameRow {
    id: String,
    title: String,
    description: String,
    category: String,
    thumbnail_url: Option<String>,
    embed_url: Option<String>,
    instructions: Option<String>,
    is_visible: bool,
    play_count: i64,
    created_at: DateTime<Utc>,
}

impl GameRow {
    fn into_game(self) -> Result<Game, DomainError> {
        Ok(Game::restore(
            GameId::from_string(&self.id),
            self.title,
            self.description,
            self.category,
            self.thumbnail_url,
            self.embed_url,
            self.instructions,
            self.is_visible,
            to_unsigned(self.play_count, "play_count")?,
            self.created_at,
        ))
    }
}

pub struct SqliteGameRepository {
    base: SqliteRepositoryBase,
}

impl SqliteGameRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl GameRepository for SqliteGameRepository {
    async fn create(&self, game: &Game) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO games (
                id, title, description, category, thumbnail_url, embed_url,
                instructions, is_visible, play_count, created_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
        "#;

        let play_count = i64::try_from(game.play_count()).map_err(|_| {
            DomainError::DataIntegrity(format!("Play count {} out of range", game.play_count()))
        })?;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(game.id().as_str())
                    .bind(game.title())
                    .bind(game.description())
                    .bind(game.category())
                    .bind(game.thumbnail_url())
                    .bind(game.embed_url())
                    .bind(game.instructions())
                    .bind(game.is_visible())
                    .bind(play_count)
                    .bind(game.created_at()),
                "Create game",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, DomainError> {
        let query = format!("SELECT {GAME_COLUMNS} FROM games WHERE id = ?1");

        let row: Option<GameRow> = self
            .base
            .fetch_optional(sqlx::query_as(&query).bind(id.as_str()), "Find game by ID")
            .await?;

        row.map(GameRow::into_game).transpose()
    }

    async fn find_visible(&self, category: Option<&str>) -> Result<Vec<Game>, DomainError> {
        let rows: Vec<GameRow> = match category {
            Some(category) => {
                let query = format!(
                    "SELECT {GAME_COLUMNS} FROM games \
                     WHERE is_visible = 1 AND category = ?1 \
                     ORDER BY created_at DESC"
                );
                self.base
                    .fetch_all(
                        sqlx::query_as(&query).bind(category),
                        "Find visible games by category",
                    )
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {GAME_COLUMNS} FROM games WHERE is_visible = 1 ORDER BY created_at DESC"
                );
                self.base
                    .fetch_all(sqlx::query_as(&query), "Find visible games")
                    .await?
            }
        };

        rows.into_iter().map(GameRow::into_game).collect()
    }

    async fn find_all(&self) -> Result<Vec<Game>, DomainError> {
        let query = format!("SELECT {GAME_COLUMNS} FROM games ORDER BY created_at DESC");

        let rows: Vec<GameRow> = self
            .base
            .fetch_all(sqlx::query_as(&query), "Find all games")
            .await?;

        rows.into_iter().map(GameRow::into_game).collect()
    }

    async fn visible_categories(&self) -> Result<Vec<String>, DomainError> {
        let rows: Vec<CategoryRow> = self
            .base
            .fetch_all(
                sqlx::query_as(
                    "SELECT DISTINCT category FROM games WHERE is_visible = 1 ORDER BY category",
                ),
                "Find visible categories",
            )
            .await?;

        Ok(rows.into_iter().map(|r| r.category).collect())
    }

    async fn increment_play_count(&self, id: &GameId) -> Result<(), DomainError> {
        let result = self
            .base
            .execute(
                sqlx::query("UPDATE games SET play_count = play_count + 1 WHERE id = ?1")
                    .bind(id.as_str()),
                "Increment play count",
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GameNotFound(id.to_string()));
        }

        Ok(())
    }

    async fn set_visibility(&self, id: &GameId, is_visible: bool) -> Result<(), DomainError> {
        let result = self
            .base
            .execute(
                sqlx::query("UPDATE games SET is_visible = ?2 WHERE id = ?1")
                    .bind(id.as_str())
                    .bind(is_visible),
                "Set game visibility",
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GameNotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: &GameId) -> Result<(), DomainError> {
        let result = self
            .base
            .execute(
                sqlx::query("DELETE FROM games WHERE id = ?1").bind(id.as_str()),
                "Delete game",
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GameNotFound(id.to_string()));
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row: TotalRow = self
            .base
            .fetch_one(
                sqlx::query_as("SELECT COUNT(*) AS total FROM games"),
                "Count games",
            )
            .await?;

        to_unsigned(row.total, "games")
    }

    async fn total_plays(&self) -> Result<u64, DomainError> {
        let row: TotalRow = self
            .base
            .fetch_one(
                sqlx::query_as("SELECT COALESCE(SUM(play_count), 0) AS total FROM games"),
                "Sum play counts",
            )
            .await?;

        to_unsigned(row.total, "play_count")
    }
}
