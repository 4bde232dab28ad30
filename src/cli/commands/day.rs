use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cycle::weekdays_in_cycle;
use crate::errors::{AppError, AppResult};
use crate::models::day_field::DayField;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::normalize_time;

/// Handle `edit`, `clear` and `kind`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (pool, mut state) = super::open_state(cfg)?;

    match cmd {
        Commands::Edit { day, field, value } => {
            let id = super::resolve_day(&state, Some(day))?;

            // validation lives here, the model takes any value
            let value = match field {
                _ if value.trim().is_empty() => String::new(),
                DayField::Start | DayField::End => normalize_time(value)?,
                DayField::Date => {
                    let d = date::parse_date(value)
                        .ok_or_else(|| AppError::InvalidDate(value.clone()))?;
                    let new_date = date::format_date(d);
                    // two records on one date: reconcile would drop one of them
                    if state.find_by_date(&new_date).is_some_and(|r| r.id != id) {
                        return Err(AppError::DateTaken(new_date));
                    }
                    if !weekdays_in_cycle(state.cycle_start()).contains(&d) {
                        warning(format!(
                            "{} is not a weekday of the current cycle: the day will be replaced on next load.",
                            d
                        ));
                    }
                    new_date
                }
            };

            if *field == DayField::Date && value.is_empty() {
                return Err(AppError::InvalidDate(value));
            }

            let target = state.record(&id).map(|r| r.date.clone()).unwrap_or_default();
            state.edit_field(&id, *field, &value);

            let shown = if value.is_empty() { "(empty)" } else { &value };
            success(format!("{} of {} set to {}.", field.as_str(), target, shown));
            super::commit(
                &pool,
                &state,
                cfg,
                "edit",
                &target,
                &format!("{} = {}", field.as_str(), shown),
            );
        }

        Commands::Clear { day } => {
            let id = super::resolve_day(&state, Some(day))?;
            let target = state.record(&id).map(|r| r.date.clone()).unwrap_or_default();

            state.clear(&id);
            success(format!("Cleared clock times of {}.", target));
            super::commit(&pool, &state, cfg, "clear", &target, "Clock-in/out removed");
        }

        Commands::Kind { day, kind } => {
            let id = super::resolve_day(&state, Some(day))?;
            let target = state.record(&id).map(|r| r.date.clone()).unwrap_or_default();

            state.set_kind(&id, *kind);
            success(format!("{} marked as {}.", target, kind.label()));
            super::commit(&pool, &state, cfg, "kind", &target, kind.as_str());
        }

        _ => {}
    }

    Ok(())
}
