//! SQLite-backed key/value store.
//!
//! # Responsibility
//! - Persist one text value per key in the `kv_entries` table.
//! - Validate connection readiness before accepting store traffic.
//!
//! # Invariants
//! - `set` is an upsert; the previous value for a key is always replaced.
//! - Construction fails on unmigrated connections instead of masking it.

use super::{KeyValueStore, StoreError, StoreResult};
use crate::db::migrations::latest_version;
use rusqlite::{params, Connection, OptionalExtension};

/// Key/value store over a migrated SQLite connection.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection after verifying schema readiness.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration known by this binary.
    /// - `MissingRequiredTable` when `kv_entries` is absent.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "kv_entries")? {
        return Err(StoreError::MissingRequiredTable("kv_entries"));
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS (
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
