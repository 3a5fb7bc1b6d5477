use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use hypd_domain::settings::{Settings, SettingsRepository};
use hypd_domain::shared::DomainError;

use crate::persistence::{RepositoryErrorMapper, SqliteRepositoryBase};

#[derive(FromRow)]
struct SettingRow {
    key: String,
    value: String,
}

pub struct SqliteSettingsRepository {
    base: SqliteRepositoryBase,
}

impl SqliteSettingsRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl SettingsRepository for SqliteSettingsRepository {
    async fn all(&self) -> Result<Settings, DomainError> {
        let rows: Vec<SettingRow> = self
            .base
            .fetch_all(
                sqlx::query_as("SELECT key, value FROM app_settings"),
                "Load settings",
            )
            .await?;

        Ok(rows.into_iter().map(|r| (r.key, r.value)).collect())
    }

    async fn upsert_all(&self, settings: &Settings) -> Result<(), DomainError> {
        let context = "Update settings";
        let mut tx = self
            .base
            .pool()
            .begin()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, context))?;

        let now = Utc::now();
        for (key, value) in settings {
            sqlx::query(
                r#"
                INSERT INTO app_settings (key, value, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(key)
            .bind(value)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, context))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, context))?;

        log::info!("[settings] updated {} key(s)", settings.len());
        Ok(())
    }
}
