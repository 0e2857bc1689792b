//! Persisted key/value state store.
//!
//! Every engine component reads and writes JSON records through the
//! [`StateStore`] trait so tests can swap in an in-memory fake. The
//! production implementation keeps the records in a SQLite table.

pub mod keys;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod sqlite;

use crate::errors::AppResult;
use crate::ui::messages::warning;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub trait StateStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>>;
    fn set_raw(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove_raw(&mut self, key: &str) -> AppResult<()>;
    /// All stored keys, in unspecified order.
    fn list_keys(&self) -> AppResult<Vec<String>>;
}

/// Read a JSON record. A row that fails to parse is treated as absent:
/// the caller falls back to a fresh default and the next write replaces
/// the corrupt value.
pub fn get_json<T: DeserializeOwned>(
    store: &impl StateStore,
    key: &str,
) -> AppResult<Option<T>> {
    match store.get_raw(key)? {
        None => Ok(None),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                warning(format!("discarding corrupt record '{key}': {e}"));
                Ok(None)
            }
        },
    }
}

/// Write a JSON record.
pub fn set_json<T: Serialize>(
    store: &mut impl StateStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)
        .map_err(|e| crate::errors::AppError::Other(format!("serialize '{key}': {e}")))?;
    store.set_raw(key, &raw)
}
