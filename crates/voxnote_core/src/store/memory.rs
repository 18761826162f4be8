//! In-memory key/value store.
//!
//! # Responsibility
//! - Provide a storage-less backend for tests and ephemeral runs.
//!
//! # Invariants
//! - Values live only as long as the store instance.

use super::{KeyValueStore, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Process-local key/value store with no durability.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one key, bypassing the trait. Test convenience.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
