//! Console feedback: one colored, iconed line per message.

use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (FG_BLUE, "ℹ️"),
            Level::Success => (FG_GREEN, "✅"),
            Level::Warning => (FG_YELLOW, "⚠️"),
            Level::Error => (FG_RED, "❌"),
        }
    }
}

/// Colors are off when NO_COLOR is set to any non-empty value.
fn use_color() -> bool {
    static COLOR: OnceLock<bool> = OnceLock::new();
    *COLOR.get_or_init(|| std::env::var("NO_COLOR").map_or(true, |v| v.is_empty()))
}

fn emit(level: Level, msg: impl fmt::Display) {
    let (color, icon) = level.style();
    let line = if use_color() {
        format!("{color}{BOLD}{icon} {RESET}{msg}")
    } else {
        format!("{icon} {msg}")
    };

    match level {
        Level::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Section header, e.g. above `db --info`.
pub fn header<T: fmt::Display>(msg: T) {
    if use_color() {
        println!("{FG_BLUE}{BOLD}=== {msg} ==={RESET}\n");
    } else {
        println!("=== {msg} ===\n");
    }
}

/// Ask a yes/no confirmation on stdin. Anything but y/yes is a no.
pub fn confirm(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).is_ok()
        && matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
