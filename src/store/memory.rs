use super::{KeyValueStore, StoredValue};
use crate::errors::AppResult;
use std::collections::HashMap;

/// Process-local store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, StoredValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<StoredValue>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: StoredValue) -> AppResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
