//! SQLite-backed preference storage.
//!
//! # Responsibility
//! - Persist named key-value tables in the single preference database.
//! - Create each table lazily on first use, matching how the host platform
//!   materializes named preference files.
//!
//! # Invariants
//! - Table names pass `validate_table_name` before SQL interpolation.
//! - A missing table reads as empty, never as an error.

use super::{validate_table_name, PrefStore, PrefsResult};
use rusqlite::Connection;

/// Durable preference store over one SQLite connection.
pub struct SqlitePrefStore {
    conn: Connection,
}

impl SqlitePrefStore {
    /// Wraps an opened connection, see [`crate::db::open_db`].
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Releases the underlying connection.
    pub fn into_inner(self) -> Connection {
        self.conn
    }

    fn ensure_table(&self, table: &str) -> PrefsResult<()> {
        validate_table_name(table)?;
        self.conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
            );"
        ))?;
        Ok(())
    }
}

impl PrefStore for SqlitePrefStore {
    fn get_string(&self, table: &str, key: &str) -> PrefsResult<Option<String>> {
        validate_table_name(table)?;

        let table_exists = {
            let mut stmt = self
                .conn
                .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1;")?;
            stmt.exists([table])?
        };
        if !table_exists {
            return Ok(None);
        }

        let mut stmt = self
            .conn
            .prepare(&format!("SELECT value FROM {table} WHERE key = ?1;"))?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn put_string(&mut self, table: &str, key: &str, value: &str) -> PrefsResult<()> {
        self.ensure_table(table)?;
        self.conn.execute(
            &format!(
                "INSERT INTO {table} (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value;"
            ),
            [key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, table: &str, key: &str) -> PrefsResult<()> {
        validate_table_name(table)?;
        // Removing from a table that was never created is a no-op, so the
        // lazy-create step is skipped on this path.
        let result = self
            .conn
            .execute(&format!("DELETE FROM {table} WHERE key = ?1;"), [key]);
        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(_, Some(ref message)))
                if message.contains("no such table") =>
            {
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
