use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::state::{AppState, CYCLE_KEY};
use crate::db::initialize::init_db;
use crate::db::kv::SqliteKvStore;
use crate::db::log;
use crate::errors::AppResult;
use crate::gateway::KvStore;
use crate::utils::date;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
///  - the first cycle, unless one is already stored
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rWorkCycle…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    // Seed the first cycle so every later command starts from stored state
    let mut store = SqliteKvStore::new(&conn);
    let state = AppState::load(&store, date::today());
    let fresh = store.get(CYCLE_KEY).is_none();
    state.save(&mut store);

    println!("✅ Database initialized at {}", &db_path);
    if fresh {
        println!(
            "📅 Cycle started on {} (ends {})",
            date::format_date(state.cycle_start()),
            date::format_date(state.cycle_end())
        );
    }

    log::ttlog_or_warn(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rWorkCycle initialization completed!");
    Ok(())
}
