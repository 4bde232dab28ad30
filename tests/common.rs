#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rworkcycle::models::day_record::DayRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Wednesday; its cycle starts on Monday 2025-09-01.
pub const TODAY: &str = "2025-09-03";

pub fn rwc() -> Command {
    cargo_bin_cmd!("rworkcycle")
}

/// Command bound to a test database, test mode and a pinned "today".
pub fn rwc_db(db_path: &str) -> Command {
    let mut cmd = rwc();
    cmd.args(["--db", db_path, "--test", "--today", TODAY]);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkcycle.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkcycle_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB (schema + first cycle)
pub fn init_db(db_path: &str) {
    rwc_db(db_path).arg("init").assert().success();
}

pub fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn record(id: &str, day: &str, start: &str, end: &str) -> DayRecord {
    DayRecord {
        id: id.to_string(),
        date: day.to_string(),
        start: (!start.is_empty()).then(|| start.to_string()),
        end: (!end.is_empty()).then(|| end.to_string()),
        kind: Default::default(),
    }
}
