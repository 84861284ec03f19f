use super::model::{DayExport, HEADERS};
use csv::Writer;
use std::path::Path;

/// Write the exported days as CSV.
pub fn write_csv(path: &Path, rows: &[DayExport]) -> csv::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(HEADERS)?;
    for r in rows {
        wtr.write_record([r.date.as_str(), r.status.as_str(), r.note.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
