use crate::config::Config;
use crate::core::intake::IntakeLogic;
use crate::core::reminders::{LocalScheduler, ReminderBook};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::DayKey;
use crate::ui::messages::header;

/// Welcome screen.
pub fn handle(cfg: &Config, color: bool) -> AppResult<()> {
    header("💊 Welcome to PillPal");
    println!("Set a daily reminder to take your contraceptive pill and keep track of it.\n");

    let session = Session::open(cfg);

    let record = IntakeLogic::record(&session, DayKey::today());
    print!("{}", IntakeLogic::render_record(&record, color));

    let book = ReminderBook::new(session.kv(), LocalScheduler::new(session.kv()));
    let times = book.list()?;
    println!();
    if times.is_empty() {
        println!("No daily reminder yet. Try: pillpal remind add 21:00");
    } else {
        let shown: Vec<String> = times.iter().map(|t| t.to_string()).collect();
        println!("Daily reminder: {}", shown.join(", "));
    }

    Ok(())
}
