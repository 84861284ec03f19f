use super::day_or_today;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::intake::IntakeLogic;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::{DayKey, DayStatus};

/// Handle `take`, `miss`, `note` and `show`.
pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    let today = DayKey::today();

    match cmd {
        Commands::Take { date } => {
            let day = day_or_today(date.as_ref())?;
            let session = Session::open(cfg);
            IntakeLogic::mark(&session, day, DayStatus::Taken, today)?;
        }
        Commands::Miss { date } => {
            let day = day_or_today(date.as_ref())?;
            let session = Session::open(cfg);
            IntakeLogic::mark(&session, day, DayStatus::NotTaken, today)?;
        }
        Commands::Note { date, text } => {
            let day = DayKey::parse(date)?;
            let session = Session::open(cfg);
            IntakeLogic::note(&session, day, text, today)?;
        }
        Commands::Show { date } => {
            let day = day_or_today(date.as_ref())?;
            let session = Session::open(cfg);
            let record = IntakeLogic::record(&session, day);
            print!("{}", IntakeLogic::render_record(&record, color));
        }
        _ => {}
    }

    Ok(())
}
