mod common;

use chrono::{Datelike, Weekday};
use common::date;
use rworkcycle::core::cycle::{cycle_end, cycle_week, monday_of, weekdays_in_cycle};

#[test]
fn test_monday_of_each_weekday() {
    // 2025-09-01 is a Monday
    for day in 1..=6 {
        let d = date(&format!("2025-09-{:02}", day));
        assert_eq!(monday_of(d), date("2025-09-01"), "failed for {}", d);
    }
}

#[test]
fn test_sunday_belongs_to_previous_week() {
    assert_eq!(monday_of(date("2025-09-07")), date("2025-09-01"));
    assert_eq!(monday_of(date("2025-09-08")), date("2025-09-08"));
}

#[test]
fn test_monday_across_month_and_year() {
    assert_eq!(monday_of(date("2026-01-01")), date("2025-12-29"));
    assert_eq!(monday_of(date("2025-03-02")), date("2025-02-24"));
}

#[test]
fn test_ten_weekdays_for_every_start_day() {
    let base = date("2025-09-01");
    for offset in 0..7 {
        let start = base + chrono::Duration::days(offset);
        let days = weekdays_in_cycle(start);

        assert_eq!(days.len(), 10, "start {}", start);
        assert!(days.windows(2).all(|w| w[0] < w[1]), "not chronological");
        assert!(
            days.iter()
                .all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        );
        assert!(days.iter().all(|d| *d >= start && *d <= cycle_end(start)));
    }
}

#[test]
fn test_monday_cycle_days() {
    let days = weekdays_in_cycle(date("2025-09-01"));
    assert_eq!(days.first(), Some(&date("2025-09-01")));
    assert_eq!(days[4], date("2025-09-05"));
    assert_eq!(days[5], date("2025-09-08"));
    assert_eq!(days.last(), Some(&date("2025-09-12")));
}

#[test]
fn test_cycle_end_is_thirteen_days_later() {
    assert_eq!(cycle_end(date("2025-09-01")), date("2025-09-14"));
    assert_eq!(cycle_end(date("2025-12-24")), date("2026-01-06"));
}

#[test]
fn test_cycle_week_counts_from_cycle_start() {
    let start = date("2025-09-03"); // Wednesday start
    assert_eq!(cycle_week(start, date("2025-09-03")), 1);
    assert_eq!(cycle_week(start, date("2025-09-09")), 1);
    assert_eq!(cycle_week(start, date("2025-09-10")), 2);
}
