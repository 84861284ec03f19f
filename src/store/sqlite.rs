use super::{KeyValueStore, StoredValue};
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, params};

/// Key-value store backed by the `kv` table of the pillpal database.
///
/// The `value` column carries no declared type, so numbers stay numbers and
/// text stays text.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn conn(&self) -> &Connection {
        self.conn
    }
}

fn unavailable(e: rusqlite::Error) -> AppError {
    AppError::StorageUnavailable(e.to_string())
}

impl KeyValueStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> AppResult<Option<StoredValue>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv WHERE key = ?1")
            .map_err(unavailable)?;

        let raw: Option<Value> = stmt
            .query_row([key], |row| row.get(0))
            .optional()
            .map_err(unavailable)?;

        Ok(match raw {
            Some(Value::Integer(i)) => Some(StoredValue::Number(i as f64)),
            Some(Value::Real(f)) => Some(StoredValue::Number(f)),
            Some(Value::Text(s)) => Some(StoredValue::Text(s)),
            // blobs and NULLs are not something pillpal ever writes
            Some(Value::Blob(_)) | Some(Value::Null) | None => None,
        })
    }

    fn set(&mut self, key: &str, value: StoredValue) -> AppResult<()> {
        let sql_value = match value {
            StoredValue::Text(s) => Value::Text(s),
            StoredValue::Number(n) => Value::Real(n),
        };

        let mut stmt = self
            .conn
            .prepare_cached(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            )
            .map_err(unavailable)?;

        stmt.execute(params![key, sql_value, Local::now().to_rfc3339()])
            .map_err(unavailable)?;

        Ok(())
    }
}
