use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations_verbose;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

/// Maintenance steps of `db`, in the order they run.
#[derive(Clone, Copy)]
enum Step {
    Migrate,
    Info,
    Check,
    Vacuum,
}

fn steps(migrate: bool, info: bool, check: bool, vacuum: bool) -> Vec<Step> {
    [
        (migrate, Step::Migrate),
        (info, Step::Info),
        (check, Step::Check),
        (vacuum, Step::Vacuum),
    ]
    .into_iter()
    .filter_map(|(wanted, step)| wanted.then_some(step))
    .collect()
}

fn integrity(pool: &DbPool) -> AppResult<String> {
    Ok(pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let plan = steps(*migrate, *show_info, *check, *vacuum);
    if plan.is_empty() {
        info("Nothing to do: pass --migrate, --info, --check or --vacuum.");
        return Ok(());
    }

    // with --migrate the schema is brought up by the Migrate step
    let mut pool = if *migrate {
        DbPool::new(&cfg.database)?
    } else {
        DbPool::open(&cfg.database)?
    };

    for step in plan {
        match step {
            Step::Migrate => {
                info("Running migrations…");
                let applied = run_pending_migrations_verbose(&pool.conn)?;
                success(format!("Migration completed ({applied} applied)."));
            }
            Step::Info => stats::print_db_info(&mut pool, &cfg.database)?,
            Step::Check => {
                info("Running integrity check…");
                match integrity(&pool)?.as_str() {
                    "ok" => success("Integrity check passed."),
                    other => error(format!("Integrity check failed: {other}")),
                }
            }
            Step::Vacuum => {
                info("Running VACUUM…");
                pool.conn.execute_batch("VACUUM;")?;
                success("Vacuum completed.");
            }
        }
    }

    Ok(())
}
