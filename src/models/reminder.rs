use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time of day a daily reminder fires, at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReminderTime {
    pub hour: u32,
    pub minute: u32,
}

impl ReminderTime {
    pub fn new(hour: u32, minute: u32) -> AppResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(AppError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Parse `HH:MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = crate::utils::time::parse_time(s)
            .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Self::from(t))
    }

    pub fn matches(&self, t: &NaiveTime) -> bool {
        self.hour == t.hour() && self.minute == t.minute()
    }
}

impl From<NaiveTime> for ReminderTime {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A daily trigger registered with a notification scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledReminder {
    pub handle: String,
    pub at: ReminderTime,
}
