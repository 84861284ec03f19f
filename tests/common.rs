#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pp() -> Command {
    cargo_bin_cmd!("pillpal")
}

/// Unique test DB path inside the system temp dir; any leftover file is removed.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pillpal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Temporary output file path inside tempdir, removed before use.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    pp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialized DB with a few days of March 2025 recorded.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    pp().args(["--db", db_path, "take", "2025-03-03"])
        .assert()
        .success();
    pp().args(["--db", db_path, "miss", "2025-03-04"])
        .assert()
        .success();
    pp().args(["--db", db_path, "note", "2025-03-04", "headache"])
        .assert()
        .success();
}
