use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORDED DAYS
    //
    let taken: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM kv WHERE key LIKE 'intake:%' AND value = 1",
        [],
        |row| row.get(0),
    )?;
    let missed: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM kv WHERE key LIKE 'intake:%' AND value = 0",
        [],
        |row| row.get(0),
    )?;
    let notes: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM kv WHERE key LIKE 'side_effects:%' AND trim(value) <> ''",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Days taken:{} {}{}{}", CYAN, RESET, GREEN, taken, RESET);
    println!("{}• Days missed:{} {}{}{}", CYAN, RESET, RED, missed, RESET);
    println!("{}• Side-effect notes:{} {}", CYAN, RESET, notes);

    //
    // 3) DATE RANGE
    //
    let first_day: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(key, 8) FROM kv WHERE key LIKE 'intake:%' ORDER BY key ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_day: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(key, 8) FROM kv WHERE key LIKE 'intake:%' ORDER BY key DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_day.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_day.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) ADHERENCE
    //
    let recorded = taken + missed;
    if recorded > 0 {
        let pct = taken as f64 * 100.0 / recorded as f64;
        println!("{}• Adherence:{} {:.1}%", CYAN, RESET, pct);
    }

    println!();
    Ok(())
}
