use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::StoreError;
use crate::models::VisitRecord;

const CREATE_VISITS: &str =
    "CREATE TABLE IF NOT EXISTS visits (url TEXT PRIMARY KEY, visit_count INTEGER NOT NULL)";

// Minimal key -> count interface so the endpoint does not care which engine
// backs it. `record_visit` is the only operation a counting request needs.
#[async_trait]
pub trait VisitStore: Send + Sync {
    // Insert-or-increment the counter for `key` and return the current count.
    async fn record_visit(&self, key: &str) -> Result<i64, StoreError>;
}

pub struct SqliteVisitStore {
    pool: SqlitePool,
}

impl SqliteVisitStore {
    // Open (creating if needed) the counter database at `path`.
    pub async fn open(path: &str) -> Result<Self, StoreError> {
        // the data directory may not exist on first run
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        // WAL mode for better concurrent reads
        sqlx::query("PRAGMA journal_mode=WAL").execute(&pool).await?;

        Self::ensure_schema(&pool).await?;

        Ok(Self { pool })
    }

    #[cfg(test)]
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        // a single connection, otherwise every pooled connection gets its
        // own empty in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Self::ensure_schema(&pool).await?;
        Ok(Self { pool })
    }

    async fn ensure_schema(pool: &SqlitePool) -> Result<(), StoreError> {
        sqlx::query(CREATE_VISITS).execute(pool).await?;
        Ok(())
    }

    pub async fn lookup(&self, key: &str) -> Result<Option<VisitRecord>, StoreError> {
        let record =
            sqlx::query_as::<_, VisitRecord>("SELECT url, visit_count FROM visits WHERE url = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(record)
    }
}

#[async_trait]
impl VisitStore for SqliteVisitStore {
    async fn record_visit(&self, key: &str) -> Result<i64, StoreError> {
        // single conflict-aware statement so two racing requests for the same
        // key never lose an update to a read-then-write gap
        sqlx::query(
            "INSERT INTO visits(url, visit_count) VALUES(?1, 1)
             ON CONFLICT(url) DO UPDATE SET visit_count = visit_count + 1",
        )
        .bind(key)
        .execute(&self.pool)
        .await?;

        let record = self
            .lookup(key)
            .await?
            .ok_or_else(|| StoreError::MissingRecord(key.to_string()))?;

        Ok(record.visit_count)
    }
}
