use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::DayKey;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let session = Session::open(cfg);
        let written = ExportLogic::export(
            &session,
            *format,
            file,
            range.as_deref(),
            *force,
            DayKey::today(),
        )?;
        success(format!("Exported {written} day(s) to {file}"));
    }
    Ok(())
}
