mod csv;
pub(crate) mod fs_utils;
mod json;
mod model;
mod range;

pub use model::DayExport;

use crate::core::day_store::DayStatusStore;
use crate::errors::{AppError, AppResult};
use crate::models::DayKey;
use crate::store::KeyValueStore;
use crate::utils::date::days_between;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Resolve `--range`, defaulting to the month containing `today`.
pub fn resolve_range(range: Option<&str>, today: NaiveDate) -> AppResult<(NaiveDate, NaiveDate)> {
    match range {
        Some(r) => range::parse_range(r),
        None => range::parse_range(&today.format("%Y-%m").to_string()),
    }
}

/// Every day in `[start, end]` that has a status or a non-blank note.
pub fn collect_days<S: KeyValueStore>(
    store: &DayStatusStore<S>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DayExport> {
    days_between(start, end)
        .into_iter()
        .map(|d| store.day(DayKey::new(d)))
        .filter(|r| !r.is_empty())
        .map(|r| DayExport::from(&r))
        .collect()
}

pub fn write(format: ExportFormat, path: &Path, rows: &[DayExport]) -> AppResult<()> {
    match format {
        ExportFormat::Csv => csv::write_csv(path, rows).map_err(|e| AppError::Export(e.to_string()))?,
        ExportFormat::Json => json::write_json(path, rows)?,
    }
    Ok(())
}
