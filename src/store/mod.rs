//! Key-value persistence service consumed by the day store and the
//! reminder book.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;

/// Scalar value held under a key.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Text(String),
    Number(f64),
}

impl StoredValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoredValue::Text(s) => Some(s),
            StoredValue::Number(_) => None,
        }
    }
}

/// Flat string-keyed store. Every `set` is a single-key write and the last
/// write on a key wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<StoredValue>>;
    fn set(&mut self, key: &str, value: StoredValue) -> AppResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> AppResult<Option<StoredValue>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: StoredValue) -> AppResult<()> {
        (**self).set(key, value)
    }
}

/// Key holding the intake status of `day_id` (an ISO date).
pub fn status_key(day_id: &str) -> String {
    format!("intake:{day_id}")
}

/// Key holding the side-effect note of `day_id`.
pub fn note_key(day_id: &str) -> String {
    format!("side_effects:{day_id}")
}

pub const REMINDERS_KEY: &str = "reminders";
pub const SCHEDULED_KEY: &str = "scheduled_triggers";
