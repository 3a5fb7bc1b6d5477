use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use hypd_domain::leaderboard::GlobalStanding;
use hypd_domain::play_session::{PlaySession, PlaySessionRepository};
use hypd_domain::shared::{DomainError, UserId};

use crate::persistence::repository_base::{sql_limit, to_unsigned, TotalRow};
use crate::persistence::SqliteRepositoryBase;

#[derive(FromRow)]
struct GlobalStandingRow {
    user_id: String,
    username: String,
    games_played: i64,
    total_play_time: i64,
}

pub struct SqlitePlaySessionRepository {
    base: SqliteRepositoryBase,
}

impl SqlitePlaySessionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl PlaySessionRepository for SqlitePlaySessionRepository {
    async fn record(&self, session: &PlaySession) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO play_sessions (id, game_id, user_id, duration_seconds, score, played_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(session.id.as_str())
                    .bind(session.game_id.as_str())
                    .bind(session.user_id.as_ref().map(|id| id.as_str()))
                    .bind(session.duration_seconds)
                    .bind(session.score)
                    .bind(session.played_at),
                "Record play session",
            )
            .await?;

        Ok(())
    }

    async fn global_standings(&self, limit: usize) -> Result<Vec<GlobalStanding>, DomainError> {
        let query = r#"
            SELECT
                p.user_id AS user_id,
                u.username AS username,
                COUNT(*) AS games_played,
                COALESCE(SUM(p.duration_seconds), 0) AS total_play_time
            FROM play_sessions p
            JOIN users u ON u.id = p.user_id
            WHERE u.is_banned = 0
            GROUP BY p.user_id, u.username
            ORDER BY games_played DESC, total_play_time DESC, u.username ASC
            LIMIT ?1
        "#;

        let rows: Vec<GlobalStandingRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query).bind(sql_limit(limit)),
                "Global leaderboard standings",
            )
            .await?;

        rows.into_iter()
            .map(|r| {
                Ok(GlobalStanding {
                    user_id: UserId::from_string(&r.user_id),
                    username: r.username,
                    games_played: to_unsigned(r.games_played, "games_played")?,
                    total_play_time: r.total_play_time,
                })
            })
            .collect()
    }

    async fn count_since(&self, since: DateTime<Utc>) -> Result<u64, DomainError> {
        let row: TotalRow = self
            .base
            .fetch_one(
                sqlx::query_as("SELECT COUNT(*) AS total FROM play_sessions WHERE played_at >= ?1")
                    .bind(since),
                "Count recent play sessions",
            )
            .await?;

        to_unsigned(row.total, "play_sessions")
    }
}
