mod common;
use common::{init_db, init_db_with_data, pp, setup_test_db};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");
    init_db(&db_path);
    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_take_then_show() {
    let db_path = setup_test_db("take_then_show");
    init_db(&db_path);

    pp().args(["--db", &db_path, "take", "2025-03-05"])
        .assert()
        .success()
        .stdout(contains("2025-03-05"))
        .stdout(contains("Pill taken"));

    pp().args(["--db", &db_path, "--no-color", "show", "2025-03-05"])
        .assert()
        .success()
        .stdout(contains("Wednesday 5 March 2025"))
        .stdout(contains("Pill taken"))
        .stdout(contains("Side effects: --"));
}

#[test]
fn test_last_mark_wins() {
    let db_path = setup_test_db("last_mark_wins");
    init_db(&db_path);

    pp().args(["--db", &db_path, "take", "2025-03-05"])
        .assert()
        .success();
    pp().args(["--db", &db_path, "miss", "2025-03-05"])
        .assert()
        .success();

    pp().args(["--db", &db_path, "--no-color", "show", "2025-03-05"])
        .assert()
        .success()
        .stdout(contains("Pill not taken"));
}

#[test]
fn test_unrecorded_day_shows_not_set() {
    let db_path = setup_test_db("unrecorded_day");
    init_db(&db_path);

    pp().args(["--db", &db_path, "--no-color", "show", "2025-03-06"])
        .assert()
        .success()
        .stdout(contains("Not set yet"));
}

#[test]
fn test_note_is_shown_trimmed() {
    let db_path = setup_test_db("note_trimmed");
    init_db_with_data(&db_path);

    pp().args(["--db", &db_path, "--no-color", "show", "2025-03-04"])
        .assert()
        .success()
        .stdout(contains("Pill not taken"))
        .stdout(contains("Side effects: headache"));
}

#[test]
fn test_whitespace_note_counts_as_none() {
    let db_path = setup_test_db("whitespace_note");
    init_db(&db_path);

    pp().args(["--db", &db_path, "note", "2025-03-07", "   "])
        .assert()
        .success()
        .stdout(contains("side effects cleared"));

    pp().args(["--db", &db_path, "--no-color", "show", "2025-03-07"])
        .assert()
        .success()
        .stdout(contains("Side effects: --"));
}

#[test]
fn test_future_day_is_refused() {
    let db_path = setup_test_db("future_day");
    init_db(&db_path);

    pp().args(["--db", &db_path, "take", "2999-01-01"])
        .assert()
        .failure()
        .stderr(contains("in the future"));

    pp().args(["--db", &db_path, "note", "2999-01-01", "nausea"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_date_is_rejected() {
    let db_path = setup_test_db("invalid_date");
    init_db(&db_path);

    pp().args(["--db", &db_path, "take", "2025-02-30"])
        .assert()
        .failure();
}

#[test]
fn test_log_records_changes() {
    let db_path = setup_test_db("log_records");
    init_db_with_data(&db_path);

    pp().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("take"))
        .stdout(contains("note"));
}

#[test]
fn test_unreachable_database_is_not_reported_as_saved() {
    let mut dir = std::env::temp_dir();
    dir.push("pillpal_db_is_a_directory");
    std::fs::create_dir_all(&dir).expect("create dir");
    let db_path = dir.to_string_lossy().to_string();

    pp().args(["--db", &db_path, "take", "2025-03-05"])
        .assert()
        .success()
        .stdout(contains("unavailable"))
        .stdout(contains("not saved"))
        .stdout(contains("✅").not());
}
