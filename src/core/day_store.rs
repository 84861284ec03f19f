//! Per-day intake status and side-effect notes on top of a key-value store.
//!
//! Storage failures never surface as errors here. Reads fall back to the
//! default value, failed writes are kept in a session overlay, and both are
//! reported through `log::warn!`.

use crate::errors::AppError;
use crate::models::{CellState, DayKey, DayStatus};
use crate::store::{KeyValueStore, MemoryStore, StoredValue, note_key, status_key};
use serde::Serialize;

/// Status and note of one day, as read together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: DayKey,
    pub status: DayStatus,
    pub note: String,
}

impl DayRecord {
    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.status == DayStatus::Unset && !self.has_note()
    }
}

pub struct DayStatusStore<S: KeyValueStore> {
    backend: S,
    overlay: MemoryStore,
    degraded: bool,
}

impl<S: KeyValueStore> DayStatusStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            overlay: MemoryStore::new(),
            degraded: false,
        }
    }

    /// True once a write could not be persisted. Later reads in this session
    /// still see the value that was set.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Overwrite the status of `day`. Setting `Unset` is a no-op: an unset
    /// day is one without a record.
    pub fn set_status(&mut self, day: DayKey, status: DayStatus) {
        let Some(code) = status.code() else {
            log::debug!("ignoring request to store an unset status for {day}");
            return;
        };
        self.write(&status_key(&day.storage_id()), StoredValue::Number(code));
    }

    pub fn get_status(&self, day: DayKey) -> DayStatus {
        let value = self.read(&status_key(&day.storage_id()));
        DayStatus::from_stored(value.as_ref())
    }

    pub fn set_note(&mut self, day: DayKey, text: &str) {
        self.write(
            &note_key(&day.storage_id()),
            StoredValue::Text(text.to_string()),
        );
    }

    pub fn get_note(&self, day: DayKey) -> String {
        match self.read(&note_key(&day.storage_id())) {
            Some(StoredValue::Text(s)) => s,
            _ => String::new(),
        }
    }

    pub fn has_note(&self, day: DayKey) -> bool {
        !self.get_note(day).trim().is_empty()
    }

    pub fn day(&self, day: DayKey) -> DayRecord {
        DayRecord {
            day,
            status: self.get_status(day),
            note: self.get_note(day),
        }
    }

    /// Display state of `day` as seen on `today`.
    pub fn cell_state(&self, day: DayKey, today: DayKey) -> CellState {
        if day > today {
            CellState::Future
        } else {
            CellState::Recorded(self.get_status(day))
        }
    }

    fn read(&self, key: &str) -> Option<StoredValue> {
        if let Ok(Some(v)) = self.overlay.get(key) {
            return Some(v);
        }

        match self.backend.get(key) {
            Ok(v) => v,
            Err(e) => {
                warn_storage(key, "read", &e);
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: StoredValue) {
        match self.backend.set(key, value.clone()) {
            Ok(()) => {
                // the persisted value is authoritative again
                if self.overlay.contains(key) {
                    let _ = self.overlay.set(key, value);
                }
            }
            Err(e) => {
                warn_storage(key, "write", &e);
                self.degraded = true;
                let _ = self.overlay.set(key, value);
            }
        }
    }
}

fn warn_storage(key: &str, op: &str, e: &AppError) {
    log::warn!("storage {op} failed for '{key}', using session value: {e}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppResult;

    fn day(y: i32, m: u32, d: u32) -> DayKey {
        DayKey::from_ymd(y, m, d).unwrap()
    }

    /// Backend whose every call fails, as a locked or missing database would.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> AppResult<Option<StoredValue>> {
            Err(AppError::StorageUnavailable("disk gone".into()))
        }

        fn set(&mut self, _key: &str, _value: StoredValue) -> AppResult<()> {
            Err(AppError::StorageUnavailable("disk gone".into()))
        }
    }

    #[test]
    fn unset_before_any_write() {
        let store = DayStatusStore::new(MemoryStore::new());
        assert_eq!(store.get_status(day(2025, 3, 5)), DayStatus::Unset);
        assert_eq!(store.get_note(day(2025, 3, 5)), "");
        assert!(!store.has_note(day(2025, 3, 5)));
    }

    #[test]
    fn status_is_overwritten() {
        let mut store = DayStatusStore::new(MemoryStore::new());
        let d = day(2025, 3, 5);

        store.set_status(d, DayStatus::Taken);
        assert_eq!(store.get_status(d), DayStatus::Taken);

        store.set_status(d, DayStatus::NotTaken);
        assert_eq!(store.get_status(d), DayStatus::NotTaken);

        store.set_status(d, DayStatus::Unset);
        assert_eq!(store.get_status(d), DayStatus::NotTaken);
    }

    #[test]
    fn whitespace_note_has_no_badge() {
        let mut store = DayStatusStore::new(MemoryStore::new());
        let d = day(2025, 3, 5);

        store.set_note(d, "   ");
        assert!(!store.has_note(d));
        assert_eq!(store.get_note(d), "   ");

        store.set_note(d, "itchy");
        assert!(store.has_note(d));

        store.set_note(d, "");
        assert!(!store.has_note(d));
        assert!(store.backend().contains(&note_key("2025-03-05")));
    }

    #[test]
    fn status_and_note_are_independent() {
        let mut store = DayStatusStore::new(MemoryStore::new());
        let d = day(2025, 3, 5);

        store.set_status(d, DayStatus::Taken);
        store.set_note(d, "mild nausea");

        assert_eq!(store.get_status(d), DayStatus::Taken);
        assert!(store.has_note(d));
        assert_eq!(store.get_status(day(2025, 3, 6)), DayStatus::Unset);
    }

    #[test]
    fn undecodable_status_reads_as_unset() {
        let mut backend = MemoryStore::new();
        backend
            .set(&status_key("2025-03-05"), StoredValue::Number(-1.0))
            .unwrap();
        backend
            .set(&status_key("2025-03-06"), StoredValue::Text("taken".into()))
            .unwrap();

        let store = DayStatusStore::new(backend);
        assert_eq!(store.get_status(day(2025, 3, 5)), DayStatus::Unset);
        assert_eq!(store.get_status(day(2025, 3, 6)), DayStatus::Unset);
    }

    #[test]
    fn broken_backend_falls_back_to_defaults_and_session_values() {
        let mut store = DayStatusStore::new(BrokenStore);
        let d = day(2025, 3, 5);

        assert_eq!(store.get_status(d), DayStatus::Unset);
        assert!(!store.is_degraded());

        store.set_status(d, DayStatus::Taken);
        store.set_note(d, "headache");

        assert!(store.is_degraded());
        assert_eq!(store.get_status(d), DayStatus::Taken);
        assert!(store.has_note(d));
    }

    #[test]
    fn future_days_are_not_editable() {
        let mut store = DayStatusStore::new(MemoryStore::new());
        let today = day(2025, 3, 10);
        store.set_status(day(2025, 3, 9), DayStatus::Taken);

        assert_eq!(
            store.cell_state(day(2025, 3, 9), today),
            CellState::Recorded(DayStatus::Taken)
        );
        assert_eq!(
            store.cell_state(today, today),
            CellState::Recorded(DayStatus::Unset)
        );
        assert_eq!(store.cell_state(day(2025, 3, 11), today), CellState::Future);
        assert!(!CellState::Future.is_editable());
    }
}
