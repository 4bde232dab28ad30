use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::{init_db, open_db};
use crate::db::log::ttlog_or_warn;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};
use std::fs;

fn file_kb(path: &str) -> f64 {
    fs::metadata(path).map(|m| m.len() as f64 / 1024.0).unwrap_or(0.0)
}

/// Handle `db --migrate | --info | --check | --vacuum`, in that order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    // opening already brings the schema up to date
    let mut pool = open_db(&cfg.database)?;

    if *migrate {
        info("Checking pending migrations…");
        init_db(&pool.conn)?;
        success("Database schema is up to date.");
    }

    if *show_info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        info("Running integrity check…");
        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            success("Integrity check passed.");
        } else {
            error(format!("Integrity check failed: {}", integrity));
        }
    }

    if *vacuum {
        let before = file_kb(&cfg.database);
        info("Running VACUUM…");
        pool.conn.execute_batch("VACUUM;")?;
        let after = file_kb(&cfg.database);

        success(format!("Vacuum completed: {:.1} KB → {:.1} KB.", before, after));
        ttlog_or_warn(
            &pool.conn,
            "vacuum",
            &cfg.database,
            &format!("Database compacted from {:.1} KB to {:.1} KB", before, after),
        );
    }

    Ok(())
}
