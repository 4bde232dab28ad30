mod common;

use common::{init_db, rwc, rwc_db, setup_test_db};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_help_lists_commands() {
    rwc()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("in"))
        .stdout(contains("out"))
        .stdout(contains("reset"));
}

#[test]
fn test_init_seeds_the_current_cycle() {
    let db = setup_test_db("init_seed");

    rwc_db(&db)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Cycle started on 2025-09-01"))
        .stdout(contains("ends 2025-09-14"));
}

#[test]
fn test_status_shows_ten_weekdays() {
    let db = setup_test_db("status_days");
    init_db(&db);

    rwc_db(&db)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-12"))
        .stdout(contains("2025-09-06").not())
        .stdout(contains("Remaining:"));
}

#[test]
fn test_clock_in_then_out() {
    let db = setup_test_db("clock_in_out");
    init_db(&db);

    rwc_db(&db)
        .args(["in", "2025-09-01", "--at", "09:00"])
        .assert()
        .success()
        .stdout(contains("Clocked in on 2025-09-01 at 09:00."));

    rwc_db(&db)
        .args(["out", "2025-09-01", "--at", "17:00"])
        .assert()
        .success()
        .stdout(contains("Clocked out on 2025-09-01 at 17:00."))
        .stdout(contains("08h 00m"));
}

#[test]
fn test_second_clock_in_keeps_the_first() {
    let db = setup_test_db("clock_in_twice");
    init_db(&db);

    rwc_db(&db)
        .args(["in", "2025-09-02", "--at", "09:00"])
        .assert()
        .success();

    rwc_db(&db)
        .args(["in", "2025-09-02", "--at", "10:30"])
        .assert()
        .success()
        .stdout(contains("Already clocked in on 2025-09-02 at 09:00."));
}

#[test]
fn test_clock_in_defaults_to_today() {
    let db = setup_test_db("clock_in_today");
    init_db(&db);

    rwc_db(&db)
        .args(["in", "--at", "8:05"])
        .assert()
        .success()
        .stdout(contains("Clocked in on 2025-09-03 at 08:05."));
}

#[test]
fn test_clock_out_without_clock_in_fails() {
    let db = setup_test_db("out_without_in");
    init_db(&db);

    rwc_db(&db)
        .args(["out", "2025-09-01", "--at", "17:00"])
        .assert()
        .failure()
        .stderr(contains("no clock-in recorded"));
}

#[test]
fn test_invalid_time_is_rejected() {
    let db = setup_test_db("invalid_time");
    init_db(&db);

    rwc_db(&db)
        .args(["in", "2025-09-01", "--at", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_day_outside_cycle_is_rejected() {
    let db = setup_test_db("unknown_day");
    init_db(&db);

    rwc_db(&db)
        .args(["in", "2025-09-06", "--at", "09:00"])
        .assert()
        .failure()
        .stderr(contains("No day in the current cycle matches"));
}

#[test]
fn test_edit_and_clear() {
    let db = setup_test_db("edit_clear");
    init_db(&db);

    rwc_db(&db)
        .args(["edit", "2025-09-04", "--field", "start", "--value", "9:15"])
        .assert()
        .success()
        .stdout(contains("start of 2025-09-04 set to 09:15."));

    rwc_db(&db)
        .args(["clear", "2025-09-04"])
        .assert()
        .success()
        .stdout(contains("Cleared clock times of 2025-09-04."));

    rwc_db(&db)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("start = 09:15"))
        .stdout(contains("Clock-in/out removed"));
}

#[test]
fn test_edit_date_outside_cycle_warns() {
    let db = setup_test_db("edit_date_warn");
    init_db(&db);

    rwc_db(&db)
        .args(["edit", "2025-09-05", "--field", "date", "--value", "2025-12-25"])
        .assert()
        .success()
        .stdout(contains("is not a weekday of the current cycle"));
}

#[test]
fn test_kind_marks_the_day() {
    let db = setup_test_db("kind_day_off");
    init_db(&db);

    rwc_db(&db)
        .args(["kind", "2025-09-08", "day-off"])
        .assert()
        .success()
        .stdout(contains("2025-09-08 marked as"));
}

#[test]
fn test_cycle_change_and_off_monday_warning() {
    let db = setup_test_db("cycle_change");
    init_db(&db);

    rwc_db(&db)
        .args(["cycle", "2025-09-03"])
        .assert()
        .success()
        .stdout(contains("Cycle moved from 2025-09-01 to 2025-09-03"))
        .stdout(contains("not from Monday"))
        .stdout(contains("2025-09-16"));

    rwc_db(&db)
        .args(["cycle", "--auto"])
        .assert()
        .success()
        .stdout(contains("to 2025-09-01"));
}

#[test]
fn test_reset_with_yes() {
    let db = setup_test_db("reset_yes");
    init_db(&db);

    rwc_db(&db)
        .args(["in", "2025-09-01", "--at", "09:00"])
        .assert()
        .success();

    rwc_db(&db)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("All days of the cycle have been reset."))
        .stdout(contains("09:00").not());
}

#[test]
fn test_reset_declined_keeps_data() {
    let db = setup_test_db("reset_declined");
    init_db(&db);

    rwc_db(&db)
        .args(["in", "2025-09-01", "--at", "09:00"])
        .assert()
        .success();

    rwc_db(&db)
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rwc_db(&db)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("09:00"));
}

#[test]
fn test_log_records_operations() {
    let db = setup_test_db("log_ops");
    init_db(&db);

    rwc_db(&db)
        .args(["in", "2025-09-01", "--at", "09:00"])
        .assert()
        .success();

    rwc_db(&db)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("Clock-in at 09:00"));
}

#[test]
fn test_db_info_and_check() {
    let db = setup_test_db("db_info");
    init_db(&db);

    rwc_db(&db)
        .args(["db", "--info"])
        .assert()
        .success()
        .stdout(contains("work_logs"));

    rwc_db(&db)
        .args(["db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_edit_date_onto_a_taken_day_is_refused() {
    let db = setup_test_db("edit_date_taken");
    init_db(&db);

    rwc_db(&db)
        .args(["in", "2025-09-02", "--at", "08:00"])
        .assert()
        .success();
    rwc_db(&db)
        .args(["out", "2025-09-02", "--at", "18:00"])
        .assert()
        .success();

    rwc_db(&db)
        .args(["edit", "2025-09-01", "--field", "date", "--value", "2025-09-02"])
        .assert()
        .failure()
        .stderr(contains("2025-09-02 already has a record"));

    rwc_db(&db)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("10h 00m"));
}

#[test]
fn test_status_does_not_rewrite_stored_cycle() {
    let db = setup_test_db("status_read_only");
    init_db(&db);

    let info = || {
        rwc_db(&db)
            .args(["db", "--info"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    let before = info();
    rwc_db(&db).arg("status").assert().success();

    assert_eq!(info(), before);
}
