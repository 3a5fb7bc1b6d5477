use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use hypd_domain::leaderboard::{GameStanding, HighScores, ScoreRepository};
use hypd_domain::shared::{DomainError, GameId, UserId};

use crate::persistence::repository_base::sql_limit;
use crate::persistence::SqliteRepositoryBase;

#[derive(FromRow)]
struct HighScoreRow {
    game_id: String,
    score: i64,
}

#[derive(FromRow)]
struct GameStandingRow {
    user_id: String,
    username: String,
    score: i64,
}

pub struct SqliteScoreRepository {
    base: SqliteRepositoryBase,
}

impl SqliteScoreRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl ScoreRepository for SqliteScoreRepository {
    async fn find_high_score(
        &self,
        user_id: &UserId,
        game_id: &GameId,
    ) -> Result<Option<i64>, DomainError> {
        let query = "SELECT game_id, score FROM high_scores WHERE user_id = ?1 AND game_id = ?2";

        let row: Option<HighScoreRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query)
                    .bind(user_id.as_str())
                    .bind(game_id.as_str()),
                "Find high score",
            )
            .await?;

        Ok(row.map(|r| r.score))
    }

    async fn high_scores_for_user(&self, user_id: &UserId) -> Result<HighScores, DomainError> {
        let query = "SELECT game_id, score FROM high_scores WHERE user_id = ?1";

        let rows: Vec<HighScoreRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query).bind(user_id.as_str()),
                "Find high scores for user",
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| (GameId::from_string(&r.game_id), r.score))
            .collect())
    }

    async fn save_high_score(
        &self,
        user_id: &UserId,
        game_id: &GameId,
        score: i64,
    ) -> Result<bool, DomainError> {
        // The WHERE clause keeps concurrent writers from lowering a stored high.
        let query = r#"
            INSERT INTO high_scores (user_id, game_id, score, achieved_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(user_id, game_id) DO UPDATE SET
                score = excluded.score,
                achieved_at = excluded.achieved_at
            WHERE excluded.score > high_scores.score
        "#;

        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(user_id.as_str())
                    .bind(game_id.as_str())
                    .bind(score)
                    .bind(Utc::now()),
                "Save high score",
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn game_standings(
        &self,
        game_id: &GameId,
        limit: usize,
    ) -> Result<Vec<GameStanding>, DomainError> {
        let query = r#"
            SELECT h.user_id AS user_id, u.username AS username, h.score AS score
            FROM high_scores h
            JOIN users u ON u.id = h.user_id
            WHERE h.game_id = ?1 AND u.is_banned = 0
            ORDER BY h.score DESC, h.achieved_at ASC
            LIMIT ?2
        "#;

        let rows: Vec<GameStandingRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query)
                    .bind(game_id.as_str())
                    .bind(sql_limit(limit)),
                "Game leaderboard standings",
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| GameStanding {
                user_id: UserId::from_string(&r.user_id),
                username: r.username,
                score: r.score,
            })
            .collect())
    }
}
