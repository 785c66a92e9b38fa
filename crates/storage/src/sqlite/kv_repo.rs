use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{KeyValueStore, StorageError};

use super::SqliteRepository;

/// Primary result code for "database or disk is full".
const SQLITE_FULL: &str = "13";

fn unavailable(err: &sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(SQLITE_FULL) => {
            StorageError::Unavailable(db.message().to_owned())
        }
        other => StorageError::Connection(other.to_string()),
    }
}

#[async_trait]
impl KeyValueStore for SqliteRepository {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| unavailable(&err))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(value))
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| unavailable(&err))?;

        Ok(())
    }
}
