use super::model::DayExport;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Write the exported days as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[DayExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
