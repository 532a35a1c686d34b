//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, error};

use crate::domain::entities::{NewUrlRecord, RankedUrls, UrlRecord};
use crate::domain::repositories::{RepositoryError, UrlRepository};

/// PostgreSQL repository for alias records.
///
/// Uniqueness relies on the `urls.alias` primary key through
/// `ON CONFLICT DO NOTHING`, and counting on a single `UPDATE ... + 1`
/// statement, so both hold under any number of concurrent callers.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    alias: String,
    original_url: String,
    access_count: i64,
}

impl TryFrom<UrlRow> for UrlRecord {
    type Error = RepositoryError;

    fn try_from(row: UrlRow) -> Result<Self, Self::Error> {
        let access_count = u64::try_from(row.access_count).map_err(|_| {
            RepositoryError::Storage(format!(
                "negative access_count {} for alias '{}'",
                row.access_count, row.alias
            ))
        })?;

        Ok(UrlRecord::new(row.alias, row.original_url, access_count))
    }
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    error!("Database error: {}", e);
    RepositoryError::Storage(e.to_string())
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, RepositoryError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (alias, original_url)
            VALUES ($1, $2)
            ON CONFLICT (alias) DO NOTHING
            RETURNING alias, original_url, access_count
            "#,
        )
        .bind(&new_record.alias)
        .bind(&new_record.original_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        // No row back means the alias was already taken.
        match row {
            Some(row) => {
                debug!(alias = %new_record.alias, "Created url record");
                row.try_into()
            }
            None => Err(RepositoryError::Conflict(new_record.alias)),
        }
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT alias, original_url, access_count
            FROM urls
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        row.map(UrlRecord::try_from).transpose()
    }

    async fn increment_access_count(&self, alias: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE urls SET access_count = access_count + 1 WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(alias.to_string()));
        }

        Ok(())
    }

    async fn list_top_by_access_count(&self, limit: u32) -> Result<RankedUrls, RepositoryError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT alias, original_url, access_count
            FROM urls
            ORDER BY access_count DESC, alias ASC
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        let items = rows
            .into_iter()
            .map(UrlRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RankedUrls::new(items))
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}
