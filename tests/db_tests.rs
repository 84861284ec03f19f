mod common;
use common::{init_db, init_db_with_data, pp, setup_test_db, temp_out};
use predicates::str::contains;
use std::path::Path;

#[test]
fn test_db_info_counts_days() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    pp().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Days taken:"))
        .stdout(contains("Side-effect notes:"))
        .stdout(contains("2025-03-03"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate_idem");
    init_db(&db_path);

    pp().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("0 applied"));
}

#[test]
fn test_db_check_passes() {
    let db_path = setup_test_db("db_check");
    init_db(&db_path);

    pp().args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_backup_plain_copy() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_data(&db_path);

    let out = temp_out("backup_plain", "sqlite");

    pp().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(Path::new(&out).exists());

    pp().args(["--db", &out, "--no-color", "show", "2025-03-03"])
        .assert()
        .success()
        .stdout(contains("Pill taken"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);

    let out = temp_out("backup_zip", "zip");
    let staged = temp_out("backup_zip", "sqlite");

    pp().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(Path::new(&out).exists());
    assert!(!Path::new(&staged).exists());
}

#[test]
fn test_db_info_on_fresh_file() {
    let db_path = setup_test_db("db_info_fresh");

    pp().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Days taken:"));
}

#[test]
fn test_db_migrate_on_fresh_file_applies_all() {
    let db_path = setup_test_db("db_migrate_fresh");

    pp().args(["--db", &db_path, "db", "--migrate", "--info"])
        .assert()
        .success()
        .stdout(contains("2 applied"))
        .stdout(contains("Days taken:"));
}
