use serde::Serialize;

/// Derived figures for the current cycle. Never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct CycleSummary {
    pub total: f64,
    pub remain: f64,
    pub percent: f64,
    pub core_violations: usize,
    pub worked_days: usize,
    pub avg_daily: f64,
}
