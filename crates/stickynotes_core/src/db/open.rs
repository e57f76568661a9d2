//! Connection bootstrap utilities for the preference database.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections with the pragmas the prefs
//!   layer relies on.
//!
//! # Invariants
//! - Returned connections have a 5 second busy timeout.

use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens the preference database file.
///
/// # Side effects
/// - Emits `prefs_db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_with(|| Connection::open(path), "file")
}

/// Opens an in-memory preference database, used by tests and tooling.
///
/// # Side effects
/// - Emits `prefs_db_open` logging events with duration and status.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with(Connection::open_in_memory, "memory")
}

fn open_with(
    open: impl FnOnce() -> rusqlite::Result<Connection>,
    mode: &str,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=prefs_db_open module=db status=start mode={mode}");

    let result = open().map_err(Into::into).and_then(configure_connection);
    match result {
        Ok(conn) => {
            info!(
                "event=prefs_db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=prefs_db_open module=db status=error mode={mode} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn configure_connection(conn: Connection) -> DbResult<Connection> {
    conn.busy_timeout(Duration::from_secs(5))?;
    Ok(conn)
}
