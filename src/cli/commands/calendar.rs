use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::build_view;
use crate::core::grid::shift_month;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::DayKey;
use crate::utils::colors::{GREEN, GREY, MAGENTA, RED, YELLOW, paint};
use crate::utils::date::parse_month;

pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    if let Commands::Calendar {
        month,
        shift,
        first_weekday,
        locale,
    } = cmd
    {
        let today = DayKey::today();

        let base = match month {
            Some(m) => parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?,
            None => today.date(),
        };
        let shown = shift_month(base, shift.unwrap_or(0))?;

        let fw = first_weekday.unwrap_or(cfg.first_weekday);
        let loc = locale.as_deref().unwrap_or(&cfg.locale);

        let session = Session::open(cfg);
        let store = session.day_store();
        let view = build_view(&store, shown, fw, loc, today)?;

        println!();
        print!("{}", view.render(color));

        let (taken, missed, unset) = view.tally();
        println!();
        println!(
            "{} taken {}  {} missed {}  {} not set {}  {} future  {} side effects",
            paint("●", GREEN, color),
            taken,
            paint("●", RED, color),
            missed,
            paint("●", YELLOW, color),
            unset,
            paint("●", GREY, color),
            paint("*", MAGENTA, color),
        );
    }

    Ok(())
}
