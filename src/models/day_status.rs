use crate::store::StoredValue;
use serde::Serialize;

/// Intake status recorded for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    #[default]
    Unset,
    Taken,
    NotTaken,
}

impl DayStatus {
    /// Numeric code persisted in the key-value store. `Unset` is never
    /// written: absence of the key means unset.
    pub fn code(&self) -> Option<f64> {
        match self {
            DayStatus::Taken => Some(1.0),
            DayStatus::NotTaken => Some(0.0),
            DayStatus::Unset => None,
        }
    }

    /// Decode a persisted value. Anything that is not exactly 0 or 1 is unset.
    pub fn from_stored(value: Option<&StoredValue>) -> Self {
        match value {
            Some(StoredValue::Number(n)) if *n == 1.0 => DayStatus::Taken,
            Some(StoredValue::Number(n)) if *n == 0.0 => DayStatus::NotTaken,
            _ => DayStatus::Unset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Unset => "unset",
            DayStatus::Taken => "taken",
            DayStatus::NotTaken => "not_taken",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::Taken => "✅ Pill taken",
            DayStatus::NotTaken => "❌ Pill not taken",
            DayStatus::Unset => "⚠️ Not set yet",
        }
    }
}
