//! Time arithmetic over raw "HH:MM" strings.
//!
//! Values are not validated here: anything typed by the user is accepted
//! and computed as-is. Validation belongs to the CLI layer.

/// Core presence window, boundaries included.
pub const CORE_START: &str = "10:00";
pub const CORE_END: &str = "16:00";

/// Minutes since midnight of a "HH:MM" value.
/// Out-of-range components ("25:70") are computed as-is.
pub fn minutes_of_day(t: &str) -> Option<i64> {
    let (h, m) = t.split_once(':')?;
    let h: i64 = h.trim().parse().ok()?;
    let m: i64 = m.trim().parse().ok()?;
    Some(h * 60 + m)
}

fn present(t: Option<&str>) -> Option<&str> {
    t.filter(|s| !s.is_empty())
}

/// Elapsed hours between two clock times, clamped at zero.
///
/// Returns 0 when either side is missing or cannot be read as `HH:MM`.
/// An end before the start yields 0, never a negative or wrapped value.
pub fn calculate_hours(start: Option<&str>, end: Option<&str>) -> f64 {
    let (Some(start), Some(end)) = (present(start), present(end)) else {
        return 0.0;
    };

    match (minutes_of_day(start), minutes_of_day(end)) {
        (Some(s), Some(e)) => ((e - s) as f64 / 60.0).max(0.0),
        _ => 0.0,
    }
}

/// Core-hours compliance with the default window (10:00–16:00).
pub fn is_core_ok(start: Option<&str>, end: Option<&str>) -> bool {
    is_core_ok_within(start, end, CORE_START, CORE_END)
}

/// Core-hours compliance against an explicit window.
///
/// Zero-padded 24h strings sort like the times they represent, so the check
/// is a plain lexicographic comparison.
pub fn is_core_ok_within(
    start: Option<&str>,
    end: Option<&str>,
    core_start: &str,
    core_end: &str,
) -> bool {
    match (present(start), present(end)) {
        (Some(s), Some(e)) => s <= core_start && e >= core_end,
        _ => false,
    }
}
