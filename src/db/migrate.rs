use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

const KV_MIGRATION: &str = "20251020_0001_create_kv";
const KV_INDEX_MIGRATION: &str = "20251104_0002_kv_updated_index";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check whether a versioned migration was already recorded in `log`.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `kv` table backing the persistence gateway.
fn migrate_create_kv(conn: &Connection) -> Result<()> {
    if migration_applied(conn, KV_MIGRATION)? && table_exists(conn, "kv")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    if !migration_applied(conn, KV_MIGRATION)? {
        mark_applied(conn, KV_MIGRATION, "Created kv table")?;
        success(format!("Migration applied: {} → created kv table", KV_MIGRATION));
    }

    Ok(())
}

fn migrate_kv_updated_index(conn: &Connection) -> Result<()> {
    if migration_applied(conn, KV_INDEX_MIGRATION)? {
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_kv_updated_at ON kv(updated_at);")?;
    mark_applied(conn, KV_INDEX_MIGRATION, "Added index on kv.updated_at")?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) log table first: migrations are recorded there
    ensure_log_table(conn)?;

    // 2) gateway storage
    migrate_create_kv(conn)?;
    migrate_kv_updated_index(conn)?;

    Ok(())
}
