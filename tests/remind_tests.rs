mod common;
use common::{init_db, pp, setup_test_db};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_remind_add_list_del() {
    let db_path = setup_test_db("remind_add_list_del");
    init_db(&db_path);

    pp().args(["--db", &db_path, "remind", "add", "21:00"])
        .assert()
        .success()
        .stdout(contains("every day at 21:00"));

    pp().args(["--db", &db_path, "remind", "add", "08:30"])
        .assert()
        .success();

    pp().args(["--db", &db_path, "remind", "list"])
        .assert()
        .success()
        .stdout(contains("08:30"))
        .stdout(contains("21:00"));

    pp().args(["--db", &db_path, "remind", "del", "21:00"])
        .assert()
        .success()
        .stdout(contains("removed"));

    pp().args(["--db", &db_path, "remind", "list"])
        .assert()
        .success()
        .stdout(contains("08:30"))
        .stdout(contains("21:00").not());
}

#[test]
fn test_remind_same_minute_is_not_duplicated() {
    let db_path = setup_test_db("remind_duplicate");
    init_db(&db_path);

    pp().args(["--db", &db_path, "remind", "add", "07:15"])
        .assert()
        .success();

    pp().args(["--db", &db_path, "remind", "add", "07:15"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn test_remind_due_only_at_the_scheduled_minute() {
    let db_path = setup_test_db("remind_due");
    init_db(&db_path);

    pp().args(["--db", &db_path, "remind", "add", "21:00"])
        .assert()
        .success();

    pp().args(["--db", &db_path, "remind", "due", "--at", "21:00"])
        .assert()
        .success()
        .stdout(contains("take your pill"));

    pp().args(["--db", &db_path, "remind", "due", "--at", "21:01"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_remind_rejects_bad_time() {
    let db_path = setup_test_db("remind_bad_time");
    init_db(&db_path);

    pp().args(["--db", &db_path, "remind", "add", "25:00"])
        .assert()
        .failure();
}

#[test]
fn test_remind_del_time_without_trigger() {
    let db_path = setup_test_db("remind_del_untriggered");
    init_db(&db_path);

    {
        let conn = rusqlite::Connection::open(&db_path).expect("open db");
        conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES ('reminders', ?1, '2025-03-01')",
            [r#"[{"hour":8,"minute":0}]"#],
        )
        .expect("seed reminders");
    }

    pp().args(["--db", &db_path, "remind", "del", "08:00"])
        .assert()
        .success()
        .stdout(contains("removed"))
        .stdout(contains("No reminder").not());

    pp().args(["--db", &db_path, "remind", "list"])
        .assert()
        .success()
        .stdout(contains("No reminders scheduled."));
}
