use std::sync::Arc;

use hypd_domain::shared::DomainError;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};

/// Maps `sqlx` failures onto domain errors, tagged with what was being attempted.
pub struct RepositoryErrorMapper;

impl RepositoryErrorMapper {
    pub fn map_sqlx_error(err: sqlx::Error, context: &str) -> DomainError {
        match err {
            sqlx::Error::RowNotFound => DomainError::NotFound(format!("{context}: row not found")),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::Conflict(format!("{context}: {}", db_err.message()))
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                DomainError::ConstraintViolation(format!("{context}: {}", db_err.message()))
            }
            sqlx::Error::PoolTimedOut => {
                log::warn!("[db] {context} timed out waiting for a connection");
                DomainError::Timeout(format!("{context}: connection pool exhausted"))
            }
            other => {
                log::error!("[db] {context} failed: {other}");
                DomainError::Repository(format!("{context}: {other}"))
            }
        }
    }
}

/// Shared pool handle plus query helpers that apply [`RepositoryErrorMapper`].
#[derive(Clone)]
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<SqliteQueryResult, DomainError> {
        query
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, context))
    }

    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, context))
    }

    pub async fn fetch_one<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<T, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, context))
    }

    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, context))
    }
}

/// Narrow a stored integer into an unsigned domain counter.
pub(crate) fn to_unsigned<T: TryFrom<i64>>(value: i64, column: &str) -> Result<T, DomainError> {
    T::try_from(value).map_err(|_| {
        DomainError::DataIntegrity(format!("Column {column} holds out-of-range value {value}"))
    })
}

/// Single `COUNT(*)`/`SUM(...)` result aliased as `total`.
#[derive(FromRow)]
pub(crate) struct TotalRow {
    pub total: i64,
}

pub(crate) fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
