pub mod backup;
pub mod calendar;
pub mod config;
pub mod day;
pub mod db;
pub mod export;
pub mod home;
pub mod init;
pub mod log;
pub mod remind;

use crate::errors::AppResult;
use crate::models::DayKey;

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today.
pub(crate) fn day_or_today(date: Option<&String>) -> AppResult<DayKey> {
    match date {
        Some(d) => DayKey::parse(d),
        None => Ok(DayKey::today()),
    }
}
