//! SQLite storage: one row per key in `kv_store`.

use super::Storage;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Transaction, TransactionBehavior, params};
use std::path::Path;
use std::time::Duration;

pub struct SqliteStorage {
    pub conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) the database at `path` and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> AppResult<Self> {
        // Other processes may hold the write lock for a short while.
        conn.busy_timeout(Duration::from_secs(5))?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Timestamp of the last write to `key`.
    pub fn updated_at(&self, key: &str) -> AppResult<Option<String>> {
        let ts = self
            .conn
            .query_row(
                "SELECT updated_at FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(ts)
    }
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL     -- ISO 8601 timestamp
        );
        ",
    )
}

fn read_value(conn: &Connection, key: &str) -> rusqlite::Result<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
    stmt.query_row([key], |row| row.get(0)).optional()
}

fn write_value(conn: &Connection, key: &str, value: &str) -> rusqlite::Result<()> {
    let now = Local::now().to_rfc3339();
    let mut stmt = conn.prepare_cached(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key, value, now])?;
    Ok(())
}

impl Storage for SqliteStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(read_value(&self.conn, key)?)
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        Ok(write_value(&self.conn, key, value)?)
    }

    /// Runs inside `BEGIN IMMEDIATE`, so concurrent writers queue up instead
    /// of overwriting each other.
    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<String>) -> Option<String>,
    ) -> AppResult<()> {
        let tx = Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)?;
        let current = read_value(&tx, key)?;
        if let Some(next) = apply(current) {
            write_value(&tx, key, &next)?;
        }
        tx.commit()?;
        Ok(())
    }
}
