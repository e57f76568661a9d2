//! In-memory preference storage.
//!
//! # Responsibility
//! - Provide a hash-map backed [`PrefStore`] with the same observable
//!   semantics as the SQLite backend, for tests and ephemeral callers.

use super::{validate_table_name, PrefStore, PrefsResult};
use std::collections::HashMap;

/// Hash-map backed preference store.
#[derive(Debug, Default)]
pub struct MemoryPrefStore {
    values: HashMap<(String, String), String>,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefStore {
    fn get_string(&self, table: &str, key: &str) -> PrefsResult<Option<String>> {
        validate_table_name(table)?;
        Ok(self
            .values
            .get(&(table.to_string(), key.to_string()))
            .cloned())
    }

    fn put_string(&mut self, table: &str, key: &str, value: &str) -> PrefsResult<()> {
        validate_table_name(table)?;
        self.values
            .insert((table.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    fn remove(&mut self, table: &str, key: &str) -> PrefsResult<()> {
        validate_table_name(table)?;
        self.values.remove(&(table.to_string(), key.to_string()));
        Ok(())
    }
}
