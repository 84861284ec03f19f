//! Daily reminder bookkeeping.
//!
//! The [`ReminderBook`] keeps the list of reminder times the user picked and
//! keeps a [`NotificationScheduler`] in line with it. Two reminders at the
//! same minute are the same reminder.

use crate::errors::{AppError, AppResult};
use crate::models::{ReminderTime, ScheduledReminder};
use crate::store::{KeyValueStore, REMINDERS_KEY, SCHEDULED_KEY, StoredValue};
use chrono::NaiveTime;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Local notification facility. Handles are opaque strings.
pub trait NotificationScheduler {
    fn request_permission(&mut self) -> AppResult<bool>;
    fn schedule_daily(&mut self, hour: u32, minute: u32) -> AppResult<String>;
    fn cancel(&mut self, handle: &str) -> AppResult<()>;
    fn list_scheduled(&self) -> AppResult<Vec<ScheduledReminder>>;
}

fn load_json<T, S>(store: &S, key: &str) -> AppResult<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(value) = store.get(key)? else {
        return Ok(Vec::new());
    };

    let Some(raw) = value.as_text() else {
        log::warn!("'{key}' does not hold a list, starting from an empty one");
        return Ok(Vec::new());
    };

    match serde_json::from_str(raw) {
        Ok(list) => Ok(list),
        Err(e) => {
            log::warn!("'{key}' is not readable ({e}), starting from an empty one");
            Ok(Vec::new())
        }
    }
}

fn save_json<T, S>(store: &mut S, key: &str, list: &[T]) -> AppResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(list).map_err(|e| AppError::Other(e.to_string()))?;
    store.set(key, StoredValue::Text(raw))
}

/// Scheduler that records daily triggers in the key-value store.
///
/// Nothing fires by itself: an external timer runs `pillpal remind due`
/// and [`LocalScheduler::due`] says whether a trigger matches the minute.
pub struct LocalScheduler<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LocalScheduler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Triggers that fire at the minute of `now`.
    pub fn due(&self, now: NaiveTime) -> AppResult<Vec<ScheduledReminder>> {
        Ok(self
            .list_scheduled()?
            .into_iter()
            .filter(|r| r.at.matches(&now))
            .collect())
    }
}

impl<S: KeyValueStore> NotificationScheduler for LocalScheduler<S> {
    fn request_permission(&mut self) -> AppResult<bool> {
        Ok(true)
    }

    fn schedule_daily(&mut self, hour: u32, minute: u32) -> AppResult<String> {
        let at = ReminderTime::new(hour, minute)?;
        let handle = uuid::Uuid::new_v4().to_string();

        let mut list: Vec<ScheduledReminder> = load_json(&self.store, SCHEDULED_KEY)?;
        list.push(ScheduledReminder {
            handle: handle.clone(),
            at,
        });
        save_json(&mut self.store, SCHEDULED_KEY, &list)?;

        Ok(handle)
    }

    fn cancel(&mut self, handle: &str) -> AppResult<()> {
        let mut list: Vec<ScheduledReminder> = load_json(&self.store, SCHEDULED_KEY)?;
        list.retain(|r| r.handle != handle);
        save_json(&mut self.store, SCHEDULED_KEY, &list)
    }

    fn list_scheduled(&self) -> AppResult<Vec<ScheduledReminder>> {
        load_json(&self.store, SCHEDULED_KEY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    Scheduled { handle: String },
    AlreadyScheduled,
}

/// What [`ReminderBook::remove`] found at the given minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    /// A recorded reminder time was dropped.
    pub forgotten: bool,
    /// Scheduled triggers cancelled.
    pub cancelled: usize,
}

impl Removal {
    pub fn is_noop(&self) -> bool {
        !self.forgotten && self.cancelled == 0
    }
}

pub struct ReminderBook<S: KeyValueStore, N: NotificationScheduler> {
    store: S,
    scheduler: N,
}

impl<S: KeyValueStore, N: NotificationScheduler> ReminderBook<S, N> {
    pub fn new(store: S, scheduler: N) -> Self {
        Self { store, scheduler }
    }

    pub fn scheduler(&self) -> &N {
        &self.scheduler
    }

    /// Recorded reminder times, earliest first.
    pub fn list(&self) -> AppResult<Vec<ReminderTime>> {
        let mut times: Vec<ReminderTime> = load_json(&self.store, REMINDERS_KEY)?;
        times.sort();
        times.dedup();
        Ok(times)
    }

    /// Schedule a daily reminder at `at` unless one already exists for
    /// that minute.
    pub fn schedule(&mut self, at: ReminderTime) -> AppResult<ScheduleOutcome> {
        if !self.scheduler.request_permission()? {
            return Err(AppError::PermissionDenied);
        }

        let already_triggered = self
            .scheduler
            .list_scheduled()?
            .iter()
            .any(|r| r.at == at);

        let outcome = if already_triggered {
            ScheduleOutcome::AlreadyScheduled
        } else {
            let handle = self.scheduler.schedule_daily(at.hour, at.minute)?;
            ScheduleOutcome::Scheduled { handle }
        };

        let mut times: Vec<ReminderTime> = load_json(&self.store, REMINDERS_KEY)?;
        if !times.contains(&at) {
            times.push(at);
            save_json(&mut self.store, REMINDERS_KEY, &times)?;
        }

        Ok(outcome)
    }

    /// Forget every reminder at `at` and cancel its triggers.
    pub fn remove(&mut self, at: ReminderTime) -> AppResult<Removal> {
        let mut times: Vec<ReminderTime> = load_json(&self.store, REMINDERS_KEY)?;
        let before = times.len();
        times.retain(|t| *t != at);
        let forgotten = times.len() != before;
        if forgotten {
            save_json(&mut self.store, REMINDERS_KEY, &times)?;
        }

        let handles: Vec<String> = self
            .scheduler
            .list_scheduled()?
            .into_iter()
            .filter(|r| r.at == at)
            .map(|r| r.handle)
            .collect();

        for h in &handles {
            self.scheduler.cancel(h)?;
        }

        Ok(Removal {
            forgotten,
            cancelled: handles.len(),
        })
    }
}
