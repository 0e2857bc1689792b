//! In-memory state store used by tests.

use crate::errors::AppResult;
use crate::store::StateStore;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    map: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization (used to simulate
    /// corrupt rows).
    pub fn seed_raw(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }
}

impl StateStore for MemoryStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_raw(&mut self, key: &str) -> AppResult<()> {
        self.map.remove(key);
        Ok(())
    }

    fn list_keys(&self) -> AppResult<Vec<String>> {
        Ok(self.map.keys().cloned().collect())
    }
}
