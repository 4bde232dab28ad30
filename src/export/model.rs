// src/export/model.rs

use crate::core::calculator::policy::Rules;
use crate::core::cycle::cycle_week;
use crate::models::day_record::DayRecord;
use crate::utils::date::weekday_short;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat row per cycle day, with the derived figures next to the raw times.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayExport {
    pub id: String,
    pub date: String,
    pub weekday: String,
    pub week: i64,
    pub kind: String,
    pub start: String,
    pub end: String,
    pub hours: f64,
    pub core_ok: bool,
}

impl DayExport {
    pub fn from_record(r: &DayRecord, cycle_start: NaiveDate, rules: &Rules) -> Self {
        let parsed = r.naive_date();

        Self {
            id: r.id.clone(),
            date: r.date.clone(),
            weekday: parsed.map(weekday_short).unwrap_or_default().to_string(),
            week: parsed.map(|d| cycle_week(cycle_start, d)).unwrap_or(0),
            kind: r.kind.as_str().to_string(),
            start: r.start_str().to_string(),
            end: r.end_str().to_string(),
            // two decimals are plenty for minute-based spans
            hours: (rules.day_hours(r) * 100.0).round() / 100.0,
            core_ok: rules.core_ok(r),
        }
    }
}
