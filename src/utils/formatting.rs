//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::OnceLock;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Fractional hours as "08h 30m" (or "08:30" when `short`).
/// Minutes are rounded to the nearest whole minute.
pub fn hours2readable(hours: f64, short: bool) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let abs_m = total_minutes.abs();
    let h = abs_m / 60;
    let m = abs_m % 60;

    if short {
        format!("{}{:02}:{:02}", sign, h, m)
    } else {
        format!("{}{:02}h {:02}m", sign, h, m)
    }
}

/// Percentage with one decimal, e.g. "42.5%".
pub fn percent_readable(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Text progress bar of `width` cells.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled.min(width)))
}

/// Remove ANSI color sequences (to measure visible width).
pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}
