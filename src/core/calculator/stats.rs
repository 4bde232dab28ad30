use crate::core::calculator::policy::Rules;
use crate::models::cycle_summary::CycleSummary;
use crate::models::day_record::DayRecord;

/// Full recomputation over the cycle's records (at most ten of them).
pub fn summarize(records: &[DayRecord], rules: &Rules) -> CycleSummary {
    let total: f64 = records.iter().map(|r| rules.day_hours(r)).sum();

    let remain = (rules.target_hours - total).max(0.0);

    let percent = if rules.target_hours > 0.0 {
        (100.0 * total / rules.target_hours).min(100.0)
    } else {
        100.0
    };

    let core_violations = records.iter().filter(|r| rules.is_core_violation(r)).count();
    let worked_days = records.iter().filter(|r| rules.counts_as_worked(r)).count();

    let avg_daily = if worked_days > 0 {
        total / worked_days as f64
    } else {
        0.0
    };

    CycleSummary {
        total,
        remain,
        percent,
        core_violations,
        worked_days,
        avg_daily,
    }
}
