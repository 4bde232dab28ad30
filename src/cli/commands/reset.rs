use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let (pool, mut state) = super::open_state(cfg)?;

        let prompt = format!(
            "Reset ALL days of the cycle starting {}? Every clock time will be lost. This action is irreversible.",
            date::format_date(state.cycle_start())
        );

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        state.reset_all();
        success("All days of the cycle have been reset.");
        super::commit(
            &pool,
            &state,
            cfg,
            "reset",
            &date::format_date(state.cycle_start()),
            "All days replaced with empty ones",
        );
    }

    Ok(())
}
