use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::time::{normalize_time, now_hhmm};

fn resolve_time(at: &Option<String>) -> AppResult<String> {
    match at {
        Some(t) => normalize_time(t),
        None => Ok(now_hhmm()),
    }
}

/// Handle `in` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::In { day, at } => clock_in(cfg, day.as_deref(), at),
        Commands::Out { day, at } => clock_out(cfg, day.as_deref(), at),
        _ => Ok(()),
    }
}

fn clock_in(cfg: &Config, day: Option<&str>, at: &Option<String>) -> AppResult<()> {
    let time = resolve_time(at)?;
    let (pool, mut state) = super::open_state(cfg)?;
    let id = super::resolve_day(&state, day)?;

    let (date, previous) = match state.record(&id) {
        Some(r) => (r.date.clone(), r.start.clone()),
        None => return Err(AppError::UnknownDay(id)),
    };

    if let Some(prev) = previous {
        info(format!("Already clocked in on {} at {}.", date, prev));
        return Ok(());
    }

    state.clock_in(&id, &time);
    success(format!("Clocked in on {} at {}.", date, time));
    super::commit(&pool, &state, cfg, "in", &date, &format!("Clock-in at {}", time));

    Ok(())
}

fn clock_out(cfg: &Config, day: Option<&str>, at: &Option<String>) -> AppResult<()> {
    let time = resolve_time(at)?;
    let (pool, mut state) = super::open_state(cfg)?;
    let id = super::resolve_day(&state, day)?;

    let (date, has_start, previous) = match state.record(&id) {
        Some(r) => (r.date.clone(), r.has_start(), r.end.clone()),
        None => return Err(AppError::UnknownDay(id)),
    };

    if !has_start {
        return Err(AppError::MissingClockIn(date));
    }

    state.clock_out(&id, &time);

    let message = match previous {
        Some(prev) => format!("Clock-out at {} (was {})", time, prev),
        None => format!("Clock-out at {}", time),
    };
    success(format!("Clocked out on {} at {}.", date, time));
    super::commit(&pool, &state, cfg, "out", &date, &message);

    Ok(())
}
