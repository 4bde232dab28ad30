//! Text rendering of the cycle table and its summary.

use crate::core::calculator::policy::{HoursPolicy, Rules};
use crate::core::cycle::cycle_week;
use crate::core::state::AppState;
use crate::models::cycle_summary::CycleSummary;
use crate::models::day_record::DayRecord;
use crate::utils::colors::{
    CYAN, GREY, RESET, color_for_core, color_for_optional_field, color_for_progress,
    colorize_in_out, paint,
};
use crate::utils::date::{format_date, weekday_short};
use crate::utils::formatting::{bold, hours2readable, percent_readable, progress_bar};
use crate::utils::table::{Column, Table};

fn core_cell(rules: &Rules, r: &DayRecord) -> String {
    let checked = rules.is_core_checked(r);
    let ok = rules.core_ok(r);
    let label = match (checked, ok) {
        (false, _) => "--",
        (true, true) => "ok",
        (true, false) => "MISS",
    };
    paint(label, color_for_core(checked, ok))
}

fn time_cell(value: Option<&str>, is_in: bool) -> String {
    colorize_in_out(value.unwrap_or("--:--"), is_in)
}

/// Cycle table, one row per day.
pub fn render_table(state: &AppState, rules: &Rules, sep: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("Week", 4),
        Column::new("Date", 10),
        Column::new("Day", 3),
        Column::new("Kind", 8),
        Column::new("In", 5),
        Column::new("Out", 5),
        Column::new("Hours", 7),
        Column::new("Core", 4),
    ]);

    for r in state.records() {
        // a hand-edited date may no longer parse
        let (week, day) = match r.naive_date() {
            Some(d) => (
                cycle_week(state.cycle_start(), d).to_string(),
                weekday_short(d).to_string(),
            ),
            None => ("?".to_string(), "?".to_string()),
        };

        let hours = rules.day_hours(r);
        let hours_str = hours2readable(hours, false);
        let hours_color = color_for_optional_field(if hours > 0.0 {
            Some(hours_str.as_str())
        } else {
            None
        });

        let kind = if rules.policy == HoursPolicy::Plain && r.kind.is_ordinary() {
            format!("{GREY}-{RESET}")
        } else {
            r.kind.label().to_string()
        };

        table.add_row(vec![
            week,
            r.date.clone(),
            day,
            kind,
            time_cell(r.start.as_deref(), true),
            time_cell(r.end.as_deref(), false),
            paint(&hours_str, hours_color),
            core_cell(rules, r),
        ]);
    }

    table.render(sep)
}

/// Summary block under the table.
pub fn render_summary(summary: &CycleSummary, rules: &Rules) -> String {
    let progress_color = color_for_progress(summary.percent);
    let violations = if summary.core_violations > 0 {
        paint(&summary.core_violations.to_string(), color_for_core(true, false))
    } else {
        summary.core_violations.to_string()
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{CYAN}Total:{RESET}           {} / {}\n",
        bold(&hours2readable(summary.total, false)),
        hours2readable(rules.target_hours, false)
    ));
    out.push_str(&format!(
        "{CYAN}Remaining:{RESET}       {}\n",
        hours2readable(summary.remain, false)
    ));
    out.push_str(&format!(
        "{CYAN}Progress:{RESET}        {} {}\n",
        paint(&progress_bar(summary.percent, 20), progress_color),
        percent_readable(summary.percent)
    ));
    out.push_str(&format!(
        "{CYAN}Worked days:{RESET}     {}\n",
        summary.worked_days
    ));
    out.push_str(&format!(
        "{CYAN}Avg daily:{RESET}       {}\n",
        hours2readable(summary.avg_daily, false)
    ));
    out.push_str(&format!(
        "{CYAN}Core violations:{RESET} {} (core {}–{})\n",
        violations, rules.core_start, rules.core_end
    ));
    out
}

/// Header, table and summary for the whole cycle.
pub fn print_cycle(state: &AppState, rules: &Rules, sep: &str) {
    println!(
        "\n=== Cycle {} → {} ({} policy) ===\n",
        format_date(state.cycle_start()),
        format_date(state.cycle_end()),
        rules.policy.as_str()
    );
    print!("{}", render_table(state, rules, sep));
    println!();
    print!("{}", render_summary(&state.summary(rules), rules));
}
