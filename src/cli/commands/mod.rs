pub mod backup;
pub mod clock;
pub mod config;
pub mod cycle;
pub mod db;
pub mod day;
pub mod export;
pub mod init;
pub mod log;
pub mod reset;
pub mod status;

use crate::config::Config;
use crate::core::calculator::policy::Rules;
use crate::core::state::AppState;
use crate::db::initialize::open_db;
use crate::db::kv::SqliteKvStore;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::render::print_cycle;
use crate::utils::date;

/// Open the database and load the cycle state from it.
pub(crate) fn open_state(cfg: &Config) -> AppResult<(DbPool, AppState)> {
    let pool = open_db(&cfg.database)?;
    let state = AppState::load(&SqliteKvStore::new(&pool.conn), date::today());
    Ok((pool, state))
}

/// Persist the state, write the audit line and show the updated cycle.
pub(crate) fn commit(
    pool: &DbPool,
    state: &AppState,
    cfg: &Config,
    operation: &str,
    target: &str,
    message: &str,
) {
    state.save(&mut SqliteKvStore::new(&pool.conn));
    ttlog_or_warn(&pool.conn, operation, target, message);
    print_cycle(state, &Rules::from_config(cfg), &cfg.separator_char);
}

/// Resolve a day selector into a record id.
///
/// Accepts a date ("YYYY-MM-DD"), a record id, or nothing (today).
pub(crate) fn resolve_day(state: &AppState, day: Option<&str>) -> AppResult<String> {
    let key = match day {
        Some(s) => s.trim().to_string(),
        None => date::format_date(date::today()),
    };

    let by_date = date::parse_date(&key).map(date::format_date);

    by_date
        .as_deref()
        .and_then(|d| state.find_by_date(d))
        .or_else(|| state.record(&key))
        .or_else(|| state.find_by_date(&key))
        .map(|r| r.id.clone())
        .ok_or(AppError::UnknownDay(key))
}
