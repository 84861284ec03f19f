use crate::core::day_store::DayRecord;
use serde::Serialize;

/// Flat row for one exported day.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayExport {
    pub date: String,
    pub status: String,
    pub note: String,
}

impl From<&DayRecord> for DayExport {
    fn from(r: &DayRecord) -> Self {
        Self {
            date: r.day.storage_id(),
            status: r.status.as_str().to_string(),
            note: r.note.trim().to_string(),
        }
    }
}

pub(crate) const HEADERS: [&str; 3] = ["date", "status", "note"];
