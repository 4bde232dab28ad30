mod common;

use common::{date, init_db, rwc_db, setup_test_db, temp_out};
use predicates::str::contains;
use rworkcycle::core::calculator::policy::Rules;
use rworkcycle::core::export::ExportLogic;
use rworkcycle::core::state::AppState;
use rworkcycle::models::day_kind::DayKind;
use std::fs;
use std::path::Path;

#[test]
fn test_rows_follow_cycle_order() {
    let mut state = AppState::new(date("2025-09-01"), &[]);
    let id = state.records()[5].id.clone();
    state.clock_in(&id, "09:00");
    state.clock_out(&id, "16:20");
    state.set_kind(&id, DayKind::HalfDay);

    let rows = ExportLogic::rows(&state, &Rules::default());

    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].weekday, "Mon");
    assert_eq!(rows[0].week, 1);
    assert_eq!(rows[5].date, "2025-09-08");
    assert_eq!(rows[5].week, 2);
    assert_eq!(rows[5].kind, "half_day");
    assert_eq!(rows[5].hours, 7.33);
    assert!(rows[5].core_ok);
    assert_eq!(rows[0].start, "");
    assert!(!rows[0].core_ok);
}

#[test]
fn test_export_json() {
    let db = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db(&db);

    rwc_db(&db)
        .args(["in", "2025-09-01", "--at", "09:00"])
        .assert()
        .success();

    rwc_db(&db)
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("export written");
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = json.as_array().expect("array of days");

    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["date"], "2025-09-01");
    assert_eq!(rows[0]["start"], "09:00");
    assert_eq!(rows[0]["end"], "");
    assert_eq!(rows[9]["date"], "2025-09-12");
}

#[test]
fn test_export_csv() {
    let db = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db(&db);

    rwc_db(&db)
        .args(["export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("export written");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "id,date,weekday,week,kind,start,end,hours,core_ok");
    assert!(lines[1].contains("2025-09-01,Mon,1,ordinary"));
}

#[test]
fn test_export_refuses_overwrite_when_declined() {
    let db = setup_test_db("export_overwrite");
    let out = temp_out("export_overwrite", "csv");
    init_db(&db);
    fs::write(&out, "keep me").expect("seed file");

    rwc_db(&db)
        .args(["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Operation cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("file"), "keep me");

    rwc_db(&db)
        .args(["export", "--file", &out, "--force"])
        .assert()
        .success();

    assert_ne!(fs::read_to_string(&out).expect("file"), "keep me");
}

#[test]
fn test_backup_plain_copy() {
    let db = setup_test_db("backup_plain");
    let out = temp_out("backup_plain", "sqlite");
    init_db(&db);

    rwc_db(&db)
        .args(["backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(fs::metadata(&out).expect("backup").len() > 0);
}

#[test]
fn test_backup_compressed() {
    let db = setup_test_db("backup_zip");
    let out = temp_out("backup_zip", "zip");
    let raw = Path::new(&out).with_extension("sqlite");
    fs::remove_file(&raw).ok();
    init_db(&db);

    rwc_db(&db)
        .args(["backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed:"));

    assert!(Path::new(&out).exists());
    assert!(!raw.exists());

    rwc_db(&db)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Backup created and compressed"));
}

#[test]
fn test_compressed_backup_asks_before_replacing_raw_copy() {
    let db = setup_test_db("backup_zip_raw");
    let out = temp_out("backup_zip_raw", "zip");
    let raw = Path::new(&out).with_extension("sqlite");
    fs::write(&raw, "older backup").expect("seed raw copy");
    init_db(&db);

    rwc_db(&db)
        .args(["backup", "--file", &out, "--compress"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Operation cancelled"));

    assert_eq!(fs::read_to_string(&raw).expect("raw copy"), "older backup");
    assert!(!Path::new(&out).exists());
}
