//! Merge a cycle's weekdays with the records already stored.

use crate::core::cycle::weekdays_in_cycle;
use crate::models::day_record::DayRecord;
use chrono::NaiveDate;
use uuid::Uuid;

/// Fresh opaque record id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// One record per cycle weekday, in chronological order.
///
/// Records whose date is in the cycle are kept untouched, missing days get
/// an empty placeholder, records outside the cycle are dropped.
pub fn reconcile(cycle_start: NaiveDate, existing: &[DayRecord]) -> Vec<DayRecord> {
    reconcile_with(cycle_start, existing, new_id)
}

pub fn reconcile_with<F>(cycle_start: NaiveDate, existing: &[DayRecord], mut next_id: F) -> Vec<DayRecord>
where
    F: FnMut() -> String,
{
    weekdays_in_cycle(cycle_start)
        .into_iter()
        .map(|day| {
            let key = day.format("%Y-%m-%d").to_string();
            existing
                .iter()
                .find(|r| r.date == key)
                .cloned()
                .unwrap_or_else(|| DayRecord::placeholder(next_id(), day))
        })
        .collect()
}
