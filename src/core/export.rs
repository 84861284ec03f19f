use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat, fs_utils::ensure_writable};
use crate::models::DayKey;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        session: &Session,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
        today: DayKey,
    ) -> AppResult<usize> {
        let (start, end) = export::resolve_range(range, today.date())?;
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let store = session.day_store();
        let rows = export::collect_days(&store, start, end);
        export::write(format, path, &rows)?;

        session.audit(
            "export",
            &path.to_string_lossy(),
            &format!("{} days from {start} to {end} as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
