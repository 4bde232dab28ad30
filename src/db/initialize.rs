use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn).map_err(|e| AppError::Migration(e.to_string()))
}

/// Open the database at `path`, creating its folder if needed, and bring
/// the schema up to date.
pub fn open_db(path: &str) -> AppResult<DbPool> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(path)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
