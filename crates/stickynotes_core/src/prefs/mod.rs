//! Named key-value preference storage.
//!
//! # Responsibility
//! - Define the storage contract that models the host platform's named
//!   preference tables.
//! - Keep SQL details behind the trait so callers and tests stay
//!   backend-agnostic.
//!
//! # Invariants
//! - Table names are validated before they reach any SQL text.
//! - Booleans are stored as the strings `true` / `false`; unreadable stored
//!   values read back as `None` so callers fall through to their defaults.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryPrefStore;
pub use sqlite::SqlitePrefStore;

pub type PrefsResult<T> = Result<T, PrefsError>;

/// Error for preference table access.
#[derive(Debug)]
pub enum PrefsError {
    Db(DbError),
    InvalidTable(String),
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidTable(name) => write!(f, "invalid preference table name `{name}`"),
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidTable(_) => None,
        }
    }
}

impl From<DbError> for PrefsError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PrefsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for named key-value preference tables.
///
/// Mirrors the host platform facility the app stores everything in: a set of
/// small named tables, each mapping string keys to scalar values.
pub trait PrefStore {
    fn get_string(&self, table: &str, key: &str) -> PrefsResult<Option<String>>;
    fn put_string(&mut self, table: &str, key: &str, value: &str) -> PrefsResult<()>;
    fn remove(&mut self, table: &str, key: &str) -> PrefsResult<()>;

    fn get_bool(&self, table: &str, key: &str) -> PrefsResult<Option<bool>> {
        Ok(self.get_string(table, key)?.and_then(|value| parse_bool(&value)))
    }

    fn put_bool(&mut self, table: &str, key: &str, value: bool) -> PrefsResult<()> {
        self.put_string(table, key, if value { "true" } else { "false" })
    }
}

pub(crate) fn validate_table_name(name: &str) -> PrefsResult<()> {
    let mut chars = name.chars();
    let leads_ok = matches!(chars.next(), Some(first) if first.is_ascii_alphabetic() || first == '_');
    if leads_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(PrefsError::InvalidTable(name.to_string()))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
