use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::policy::Rules;
use crate::core::cycle::{is_weekday, monday_of_current_cycle};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::ui::render::print_cycle;
use crate::utils::date;
use chrono::{Datelike, Weekday};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cycle { start, auto } = cmd {
        let (pool, mut state) = super::open_state(cfg)?;

        let new_start = if *auto {
            Some(monday_of_current_cycle())
        } else {
            match start {
                Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
                None => None,
            }
        };

        let Some(new_start) = new_start else {
            print_cycle(&state, &Rules::from_config(cfg), &cfg.separator_char);
            return Ok(());
        };

        // a manual start is kept as typed, even off-Monday
        if new_start.weekday() != Weekday::Mon {
            warning(format!(
                "{} is a {}: weeks will be counted from this day, not from Monday.",
                new_start,
                new_start.weekday()
            ));
        }
        if !is_weekday(new_start) {
            warning("The cycle starts on a weekend day.");
        }

        let previous = state.cycle_start();
        state.change_cycle(new_start);

        success(format!(
            "Cycle moved from {} to {} → {}.",
            date::format_date(previous),
            date::format_date(state.cycle_start()),
            date::format_date(state.cycle_end())
        ));
        super::commit(
            &pool,
            &state,
            cfg,
            "cycle",
            &date::format_date(new_start),
            &format!("Cycle start changed from {}", date::format_date(previous)),
        );
    }

    Ok(())
}
