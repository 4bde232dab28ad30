//! Time utilities: parsing HH:MM entered by the user, current wall-clock time.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Validate a user-typed time and return it zero-padded ("9:5" → "09:05").
/// The padding keeps the lexicographic core-hours check meaningful.
pub fn normalize_time(t: &str) -> AppResult<String> {
    parse_time(t)
        .map(format_time)
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn format_time(t: NaiveTime) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Current local wall-clock time, "HH:MM".
pub fn now_hhmm() -> String {
    format_time(Local::now().time())
}
