//! Application state: the active cycle and its day records.
//!
//! This is the single source of truth. Summaries and table output are views
//! computed from it on every read; the gateway is only touched by
//! [`AppState::load`] and [`AppState::save`].

use crate::core::calculator::policy::Rules;
use crate::core::calculator::stats::summarize;
use crate::core::cycle::{cycle_end, monday_of};
use crate::core::reconcile::reconcile;
use crate::gateway::KvStore;
use crate::models::cycle_summary::CycleSummary;
use crate::models::day_field::DayField;
use crate::models::day_kind::DayKind;
use crate::models::day_record::{DayRecord, time_value};
use chrono::NaiveDate;

/// Gateway key holding the JSON list of day records.
pub const LOGS_KEY: &str = "work_logs";
/// Gateway key holding the cycle start ("YYYY-MM-DD").
pub const CYCLE_KEY: &str = "cycle_start";

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    cycle_start: NaiveDate,
    records: Vec<DayRecord>,
}

impl AppState {
    /// Build the state for `cycle_start`, reconciling `existing` into it.
    pub fn new(cycle_start: NaiveDate, existing: &[DayRecord]) -> Self {
        Self {
            cycle_start,
            records: reconcile(cycle_start, existing),
        }
    }

    /// Load from the gateway, falling back to defaults.
    ///
    /// A missing or unreadable cycle start becomes the Monday of `today`'s
    /// week; a missing or malformed record list is treated as empty.
    pub fn load(store: &dyn KvStore, today: NaiveDate) -> Self {
        let cycle_start = store
            .get(CYCLE_KEY)
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
            .unwrap_or_else(|| monday_of(today));

        let existing = decode_records(store.get(LOGS_KEY).as_deref());

        Self::new(cycle_start, &existing)
    }

    /// Hand the current state to the gateway. Write failures are the
    /// gateway's business and never reach the caller.
    pub fn save(&self, store: &mut dyn KvStore) {
        if let Some(json) = encode_records(&self.records) {
            store.set(LOGS_KEY, &json);
        }
        store.set(CYCLE_KEY, &self.cycle_start.format("%Y-%m-%d").to_string());
    }

    pub fn cycle_start(&self) -> NaiveDate {
        self.cycle_start
    }

    pub fn cycle_end(&self) -> NaiveDate {
        cycle_end(self.cycle_start)
    }

    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    pub fn record(&self, id: &str) -> Option<&DayRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn find_by_date(&self, date: &str) -> Option<&DayRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    pub fn summary(&self, rules: &Rules) -> CycleSummary {
        summarize(&self.records, rules)
    }

    fn record_mut(&mut self, id: &str) -> Option<&mut DayRecord> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    /// Set the clock-in time, only if none is recorded yet.
    /// Returns `false` when no record has that id.
    pub fn clock_in(&mut self, id: &str, now: &str) -> bool {
        match self.record_mut(id) {
            Some(r) => {
                if r.start.is_none() {
                    r.start = time_value(now);
                }
                true
            }
            None => false,
        }
    }

    /// Set the clock-out time, replacing any previous one.
    pub fn clock_out(&mut self, id: &str, now: &str) -> bool {
        match self.record_mut(id) {
            Some(r) => {
                r.end = time_value(now);
                true
            }
            None => false,
        }
    }

    /// Overwrite a field verbatim. An empty value clears a time field.
    pub fn edit_field(&mut self, id: &str, field: DayField, value: &str) -> bool {
        let Some(r) = self.record_mut(id) else {
            return false;
        };

        match field {
            DayField::Date => r.date = value.to_string(),
            DayField::Start => r.start = time_value(value),
            DayField::End => r.end = time_value(value),
        }
        true
    }

    pub fn clear(&mut self, id: &str) -> bool {
        match self.record_mut(id) {
            Some(r) => {
                r.start = None;
                r.end = None;
                true
            }
            None => false,
        }
    }

    pub fn set_kind(&mut self, id: &str, kind: DayKind) -> bool {
        match self.record_mut(id) {
            Some(r) => {
                r.kind = kind;
                true
            }
            None => false,
        }
    }

    /// Move to another cycle. The start is taken as given, even when it is
    /// not a Monday.
    pub fn change_cycle(&mut self, new_start: NaiveDate) {
        self.cycle_start = new_start;
        self.records = reconcile(new_start, &self.records);
    }

    /// Replace every record of the cycle with a fresh empty one.
    pub fn reset_all(&mut self) {
        self.records = reconcile(self.cycle_start, &[]);
    }
}

/// Decode the stored record list; anything unreadable counts as no data.
pub fn decode_records(raw: Option<&str>) -> Vec<DayRecord> {
    raw.and_then(|s| serde_json::from_str::<Vec<DayRecord>>(s).ok())
        .unwrap_or_default()
}

pub fn encode_records(records: &[DayRecord]) -> Option<String> {
    serde_json::to_string(records).ok()
}
