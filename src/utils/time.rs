//! Time utilities: parsing HH:MM and formatting.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn now() -> NaiveTime {
    chrono::Local::now().time()
}
