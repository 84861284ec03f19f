use crate::core::day_store::{DayRecord, DayStatusStore};
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::{DayKey, DayStatus};
use crate::store::KeyValueStore;
use crate::ui::messages::{success, warning};
use crate::utils::colors::paint;

/// High-level logic behind `take`, `miss`, `note` and `show`.
pub struct IntakeLogic;

fn ensure_not_future(day: DayKey, today: DayKey) -> AppResult<()> {
    if day > today {
        return Err(AppError::InvalidArgument(format!(
            "{day} is in the future, only today or earlier can be recorded"
        )));
    }
    Ok(())
}

/// True when the last writes reached the database.
fn persisted<S: KeyValueStore>(session: &Session, store: &DayStatusStore<S>) -> bool {
    session.is_persistent() && !store.is_degraded()
}

fn report_saved<S: KeyValueStore>(session: &Session, store: &DayStatusStore<S>, what: &str) {
    if !persisted(session, store) {
        warning(format!("{what} (not saved: storage unavailable)"));
    } else {
        success(what);
    }
}

impl IntakeLogic {
    pub fn mark(session: &Session, day: DayKey, status: DayStatus, today: DayKey) -> AppResult<()> {
        ensure_not_future(day, today)?;
        if status == DayStatus::Unset {
            return Err(AppError::InvalidArgument(
                "a day can only be marked taken or not taken".into(),
            ));
        }

        let mut store = session.day_store();
        let previous = store.get_status(day);
        store.set_status(day, status);

        let op = match status {
            DayStatus::Taken => "take",
            _ => "miss",
        };
        session.audit(
            op,
            &day.storage_id(),
            &format!("{} → {}", previous.as_str(), status.as_str()),
        );

        report_saved(session, &store, &format!("{}: {}", day, status.label()));
        Ok(())
    }

    pub fn note(session: &Session, day: DayKey, text: &str, today: DayKey) -> AppResult<()> {
        ensure_not_future(day, today)?;

        let mut store = session.day_store();
        store.set_note(day, text);

        let trimmed = text.trim();
        let message = if trimmed.is_empty() {
            "note cleared".to_string()
        } else {
            format!("note set ({} chars)", trimmed.chars().count())
        };
        session.audit("note", &day.storage_id(), &message);

        if trimmed.is_empty() {
            report_saved(session, &store, &format!("{day}: side effects cleared"));
        } else {
            report_saved(session, &store, &format!("{day}: side effects saved"));
        }
        Ok(())
    }

    pub fn record(session: &Session, day: DayKey) -> DayRecord {
        session.day_store().day(day)
    }

    /// Detail view of a single day.
    pub fn render_record(record: &DayRecord, color: bool) -> String {
        let state = crate::models::CellState::Recorded(record.status);
        let mut out = format!(
            "Status for {}\n  {}\n",
            record.day.date().format("%A %-d %B %Y"),
            paint(record.status.label(), state.color(), color)
        );

        out.push_str("  Side effects: ");
        if record.has_note() {
            out.push_str(record.note.trim());
        } else {
            out.push_str("--");
        }
        out.push('\n');
        out
    }
}
