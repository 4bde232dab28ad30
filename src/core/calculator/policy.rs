//! Hours policy: how much a day is worth and which days are checked
//! against the core window.

use crate::config::Config;
use crate::core::calculator::hours::{CORE_END, CORE_START, calculate_hours, is_core_ok_within};
use crate::models::day_kind::DayKind;
use crate::models::day_record::DayRecord;
use serde::{Deserialize, Serialize};

pub const TARGET_HOURS: f64 = 80.0;
pub const LUNCH_HOURS: f64 = 1.0;
pub const HALF_DAY_CREDIT_HOURS: f64 = 4.0;
pub const DAY_OFF_HOURS: f64 = 8.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursPolicy {
    /// Raw clock span for every day, day kind ignored.
    #[default]
    Plain,
    /// Lunch deducted from ordinary days, fixed credits for half days and days off.
    LunchDeduction,
}

impl HoursPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            HoursPolicy::Plain => "plain",
            HoursPolicy::LunchDeduction => "lunch_deduction",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    pub policy: HoursPolicy,
    pub target_hours: f64,
    pub core_start: String,
    pub core_end: String,
    pub lunch_hours: f64,
    pub half_day_credit_hours: f64,
    pub day_off_hours: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            policy: HoursPolicy::Plain,
            target_hours: TARGET_HOURS,
            core_start: CORE_START.to_string(),
            core_end: CORE_END.to_string(),
            lunch_hours: LUNCH_HOURS,
            half_day_credit_hours: HALF_DAY_CREDIT_HOURS,
            day_off_hours: DAY_OFF_HOURS,
        }
    }
}

impl Rules {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            policy: cfg.hours_policy,
            target_hours: cfg.target_hours,
            core_start: cfg.core_start.clone(),
            core_end: cfg.core_end.clone(),
            lunch_hours: cfg.lunch_hours,
            half_day_credit_hours: cfg.half_day_credit_hours,
            day_off_hours: cfg.day_off_hours,
        }
    }

    /// Hours credited to a single day.
    pub fn day_hours(&self, r: &DayRecord) -> f64 {
        let span = calculate_hours(r.start.as_deref(), r.end.as_deref());

        match self.policy {
            HoursPolicy::Plain => span,
            HoursPolicy::LunchDeduction => match r.kind {
                DayKind::Ordinary if span > 0.0 => (span - self.lunch_hours).max(0.0),
                DayKind::Ordinary => 0.0,
                DayKind::HalfDay => span + self.half_day_credit_hours,
                DayKind::DayOff => self.day_off_hours,
            },
        }
    }

    pub fn core_ok(&self, r: &DayRecord) -> bool {
        is_core_ok_within(
            r.start.as_deref(),
            r.end.as_deref(),
            &self.core_start,
            &self.core_end,
        )
    }

    /// Whether the day takes part in the core-hours check at all.
    pub fn is_core_checked(&self, r: &DayRecord) -> bool {
        match self.policy {
            HoursPolicy::Plain => r.is_complete(),
            HoursPolicy::LunchDeduction => r.is_complete() && r.kind.is_ordinary(),
        }
    }

    pub fn is_core_violation(&self, r: &DayRecord) -> bool {
        self.is_core_checked(r) && !self.core_ok(r)
    }

    pub fn counts_as_worked(&self, r: &DayRecord) -> bool {
        match self.policy {
            HoursPolicy::Plain => r.is_complete(),
            HoursPolicy::LunchDeduction => r.is_complete() || r.kind == DayKind::DayOff,
        }
    }
}
