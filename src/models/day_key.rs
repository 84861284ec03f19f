use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one calendar day, used as the lookup key of the day store.
///
/// Always a plain Gregorian date: the time of day and the time zone are
/// dropped on construction, so every instant of the same local day maps to
/// the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> AppResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Normalize a zoned timestamp to the day it falls on in its own zone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self(dt.date_naive())
    }

    pub fn today() -> Self {
        Self(crate::utils::date::today())
    }

    /// Parse `YYYY-MM-DD`.
    pub fn parse(s: &str) -> AppResult<Self> {
        crate::utils::date::parse_date(s)
            .map(Self)
            .ok_or_else(|| AppError::InvalidDate(s.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Locale-independent encoding used inside storage keys.
    pub fn storage_id(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.storage_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn same_day_timestamps_share_a_key() {
        let morning = Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 1).unwrap();
        let night = Utc.with_ymd_and_hms(2025, 3, 5, 23, 59, 59).unwrap();
        assert_eq!(DayKey::from_datetime(&morning), DayKey::from_datetime(&night));
    }

    #[test]
    fn key_follows_the_local_day_of_the_timestamp() {
        let brussels = FixedOffset::east_opt(2 * 3600).unwrap();
        let late_utc = Utc.with_ymd_and_hms(2025, 3, 5, 23, 30, 0).unwrap();
        let local = late_utc.with_timezone(&brussels);
        assert_eq!(DayKey::from_datetime(&local).storage_id(), "2025-03-06");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(DayKey::parse("2025-02-30").is_err());
        assert!(DayKey::parse("05/03/2025").is_err());
        assert_eq!(DayKey::parse("2025-03-05").unwrap().to_string(), "2025-03-05");
    }
}
