use crate::config::Config;
use crate::core::calculator::policy::Rules;
use crate::core::state::CYCLE_KEY;
use crate::db::kv::SqliteKvStore;
use crate::errors::AppResult;
use crate::gateway::KvStore;
use crate::ui::render::print_cycle;

/// Show the current cycle. Nothing is written, except on a database that
/// has no stored cycle yet: the freshly derived one is saved then.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let (pool, state) = super::open_state(cfg)?;

    let mut store = SqliteKvStore::new(&pool.conn);
    if store.get(CYCLE_KEY).is_none() {
        state.save(&mut store);
    }
    print_cycle(&state, &Rules::from_config(cfg), &cfg.separator_char);

    Ok(())
}
