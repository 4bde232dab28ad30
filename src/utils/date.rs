use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::OnceLock;

static TODAY_OVERRIDE: OnceLock<NaiveDate> = OnceLock::new();

/// Pin "today" for the whole process (used by `--today`).
/// Only the first call has an effect.
pub fn set_today_override(day: NaiveDate) {
    let _ = TODAY_OVERRIDE.set(day);
}

pub fn today() -> NaiveDate {
    TODAY_OVERRIDE
        .get()
        .copied()
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn weekday_short(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
