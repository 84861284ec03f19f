use crate::cli::parser::{Commands, RemindAction};
use crate::config::Config;
use crate::core::reminders::{LocalScheduler, ReminderBook, ScheduleOutcome};
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::ReminderTime;
use crate::ui::messages::{info, success, warning};
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Remind { action } = cmd else {
        return Ok(());
    };

    let session = Session::open(cfg);
    let mut book = ReminderBook::new(session.kv(), LocalScheduler::new(session.kv()));

    match action {
        RemindAction::Add { time } => {
            let at = ReminderTime::parse(time)?;
            match book.schedule(at)? {
                ScheduleOutcome::Scheduled { handle } => {
                    session.audit("remind_add", &at.to_string(), &format!("handle {handle}"));
                    success(format!("Reminder scheduled: every day at {at}."));
                }
                ScheduleOutcome::AlreadyScheduled => {
                    info(format!("A reminder at {at} already exists."));
                }
            }
        }
        RemindAction::List => {
            let times = book.list()?;
            if times.is_empty() {
                println!("No reminders scheduled.");
            } else {
                println!("Scheduled reminders:");
                for t in times {
                    println!("  ⏰ {t}");
                }
            }
        }
        RemindAction::Del { time } => {
            let at = ReminderTime::parse(time)?;
            let removal = book.remove(at)?;
            session.audit(
                "remind_del",
                &at.to_string(),
                &format!("{} trigger(s) cancelled", removal.cancelled),
            );
            if removal.is_noop() {
                warning(format!("No reminder was scheduled at {at}."));
            } else {
                success(format!("Reminder at {at} removed."));
            }
        }
        RemindAction::Due { at } => {
            let now = match at {
                Some(t) => time::parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?,
                None => time::now(),
            };
            if !book.scheduler().due(now)?.is_empty() {
                println!("{}", cfg.reminder_title);
                println!("{}", cfg.reminder_body);
            }
        }
    }

    Ok(())
}
