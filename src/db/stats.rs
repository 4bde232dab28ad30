use crate::db::kv::SqliteKvStore;
use crate::db::pool::DbPool;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    header("Database info");

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED KEYS
    //
    let entries = SqliteKvStore::new(&pool.conn).entries()?;
    println!("{}• Stored keys:{}", CYAN, RESET);
    if entries.is_empty() {
        println!("    {GREY}--{RESET}");
    }
    for (key, updated_at) in entries {
        println!("    {}{:<12}{} updated {}", GREEN, key, RESET, updated_at);
    }

    //
    // 3) AUDIT LOG
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    let last: Option<String> = pool
        .conn
        .query_row("SELECT date FROM log ORDER BY id DESC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;
    println!(
        "{}• Last activity:{} {}",
        CYAN,
        RESET,
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
