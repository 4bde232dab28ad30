mod common;

use common::{date, record};
use rworkcycle::core::reconcile::{reconcile, reconcile_with};
use std::collections::HashSet;

#[test]
fn test_empty_store_gives_ten_placeholders() {
    let out = reconcile(date("2025-09-01"), &[]);

    assert_eq!(out.len(), 10);
    assert!(out.iter().all(|r| r.start.is_none() && r.end.is_none()));

    let ids: HashSet<&str> = out.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), 10, "ids must be unique");

    let dates: Vec<&str> = out.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates[0], "2025-09-01");
    assert_eq!(dates[9], "2025-09-12");
}

#[test]
fn test_existing_days_are_kept_untouched() {
    let existing = vec![
        record("a", "2025-09-02", "09:00", "17:00"),
        record("b", "2025-09-10", "08:30", ""),
    ];

    let out = reconcile(date("2025-09-01"), &existing);

    assert_eq!(out[1], existing[0]);
    assert_eq!(out[7], existing[1]);
}

#[test]
fn test_out_of_cycle_days_are_dropped() {
    let existing = vec![
        record("old", "2025-08-29", "09:00", "17:00"),
        record("keep", "2025-09-05", "09:00", "17:00"),
    ];

    let out = reconcile(date("2025-09-01"), &existing);

    assert_eq!(out.len(), 10);
    assert!(out.iter().all(|r| r.id != "old"));
    assert!(out.iter().any(|r| r.id == "keep"));
}

#[test]
fn test_moving_the_cycle_keeps_shared_days_and_creates_new_ones() {
    let first = reconcile(date("2025-09-01"), &[]);
    let mut first = first;
    first[5].start = Some("09:00".into()); // 2025-09-08

    let moved = reconcile(date("2025-09-08"), &first);

    // week two of the old cycle is week one of the new one
    for i in 0..5 {
        assert_eq!(moved[i], first[i + 5]);
    }

    let old_ids: HashSet<&str> = first.iter().map(|r| r.id.as_str()).collect();
    for r in &moved[5..] {
        assert!(!old_ids.contains(r.id.as_str()), "id {} reused", r.id);
        assert!(r.start.is_none());
    }
}

#[test]
fn test_reconcile_is_idempotent() {
    let existing = vec![
        record("a", "2025-09-03", "09:00", "17:00"),
        record("z", "2025-10-01", "09:00", "17:00"),
    ];
    let start = date("2025-09-01");

    let once = reconcile(start, &existing);
    let twice = reconcile(start, &once);

    assert_eq!(once, twice);
}

#[test]
fn test_first_duplicate_wins() {
    let existing = vec![
        record("first", "2025-09-01", "09:00", ""),
        record("second", "2025-09-01", "10:00", ""),
    ];

    let out = reconcile(date("2025-09-01"), &existing);

    assert_eq!(out[0].id, "first");
    assert_eq!(out.iter().filter(|r| r.date == "2025-09-01").count(), 1);
}

#[test]
fn test_ids_come_from_the_given_generator() {
    let mut n = 0;
    let out = reconcile_with(date("2025-09-01"), &[], || {
        n += 1;
        format!("id-{n}")
    });

    assert_eq!(out[0].id, "id-1");
    assert_eq!(out[9].id, "id-10");
}
