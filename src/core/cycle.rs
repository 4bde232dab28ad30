//! Cycle calendar: a cycle is 14 consecutive calendar days starting at the
//! cycle start; only its weekdays are tracked.

use crate::utils::date;
use chrono::{Datelike, Days, NaiveDate, Weekday};

pub const CYCLE_DAYS: u64 = 14;

/// Monday of the week `day` falls in (Sunday belongs to the week before).
pub fn monday_of(day: NaiveDate) -> NaiveDate {
    let back = day.weekday().num_days_from_monday() as u64;
    day.checked_sub_days(Days::new(back)).unwrap_or(day)
}

/// Automatic cycle start: the Monday of the current week.
pub fn monday_of_current_cycle() -> NaiveDate {
    monday_of(date::today())
}

pub fn is_weekday(day: NaiveDate) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// All 14 calendar days of the cycle, weekends included.
pub fn cycle_days(cycle_start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..CYCLE_DAYS).filter_map(move |i| cycle_start.checked_add_days(Days::new(i)))
}

/// The ten weekdays of the cycle, in chronological order.
/// The start does not need to be a Monday.
pub fn weekdays_in_cycle(cycle_start: NaiveDate) -> Vec<NaiveDate> {
    cycle_days(cycle_start).filter(|d| is_weekday(*d)).collect()
}

/// Last calendar day of the cycle (inclusive).
pub fn cycle_end(cycle_start: NaiveDate) -> NaiveDate {
    cycle_start
        .checked_add_days(Days::new(CYCLE_DAYS - 1))
        .unwrap_or(NaiveDate::MAX)
}

/// 1-based week of `day` relative to the cycle start, not to the calendar week.
pub fn cycle_week(cycle_start: NaiveDate, day: NaiveDate) -> i64 {
    (day - cycle_start).num_days().div_euclid(7) + 1
}
