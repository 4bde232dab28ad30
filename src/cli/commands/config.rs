use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{fill_missing_fields, missing_fields};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}: defaults are in use.",
                    path.display()
                ));
            } else {
                let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
                let missing = missing_fields(&content)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `rworkcycle config --migrate` to add them with default values.");
                }
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            if !path.exists() {
                warning("No configuration file to migrate. Run `rworkcycle init` first.");
            } else {
                let added = fill_missing_fields(&path)?;
                if added.is_empty() {
                    info("Configuration already up to date.");
                } else {
                    success(format!("Added fields: {}", added.join(", ")));
                    if let Ok(pool) = DbPool::new(&cfg.database) {
                        ttlog_or_warn(
                            &pool.conn,
                            "migration_applied",
                            "config",
                            &format!("Added config fields: {}", added.join(", ")),
                        );
                    }
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(&path.to_string_lossy(), editor);
        }
    }

    Ok(())
}

fn edit(path: &str, editor: &Option<String>) {
    // Platform default editor
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    // --editor wins over the environment
    let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Ok(_) | Err(_) => {
                    crate::ui::messages::error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        default_editor
                    ));
                }
            }
        }
    }
}
