//! rWorkCycle library root.
//! Exposes the cycle model, the CLI parser, the high-level run() function
//! and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod gateway;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::In { .. } | Commands::Out { .. } => {
            cli::commands::clock::handle(&cli.command, cfg)
        }
        Commands::Edit { .. } | Commands::Clear { .. } | Commands::Kind { .. } => {
            cli::commands::day::handle(&cli.command, cfg)
        }
        Commands::Cycle { .. } => cli::commands::cycle::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ pinned "today", if any
    if let Some(day) = &cli.today {
        let d = utils::date::parse_date(day).ok_or_else(|| AppError::InvalidDate(day.clone()))?;
        utils::date::set_today_override(d);
    }

    // 3️⃣ load config ONCE
    let mut cfg = Config::load()?;

    // 4️⃣ database override from the command line
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    cfg.validate()?;

    // 5️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
