/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Returns GREY when the field is empty (None or "" or "--:--"),
/// and RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() && v.as_ref() != "--:--" => RESET,
        _ => GREY,
    }
}

/// Progress color:
/// target reached → green
/// at least half → yellow
/// below → red
pub fn color_for_progress(percent: f64) -> &'static str {
    if percent >= 100.0 {
        GREEN
    } else if percent >= 50.0 {
        YELLOW
    } else {
        RED
    }
}

/// Core check color: only complete days get a verdict.
pub fn color_for_core(checked: bool, ok: bool) -> &'static str {
    match (checked, ok) {
        (false, _) => GREY,
        (true, true) => GREEN,
        (true, false) => RED,
    }
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

/// Wrap `value` in `color`, leaving plain output when the color is RESET.
pub fn paint(value: &str, color: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
