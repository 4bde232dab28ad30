use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log::ttlog_or_warn;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally replacing the copy with
    /// a zip archive. Returns the path of the final backup.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let requested = expand_tilde(dest_file);

        // the raw copy must never be the archive itself
        let dest = if compress && requested.extension().is_some_and(|e| e == "zip") {
            requested.with_extension("sqlite")
        } else {
            requested
        };

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask confirmation
        // with compression the raw copy is written (then removed) next to the archive
        let mut targets = vec![dest.clone()];
        if compress {
            targets.push(dest.with_extension("zip"));
        }
        for target in targets.iter().filter(|t| t.exists()) {
            if !confirm(&format!(
                "The file '{}' already exists. Overwrite it?",
                target.display()
            )) {
                info("Backup cancelled by user.");
                return Err(AppError::Cancelled("backup destination exists".into()));
            }
        }

        // 4️⃣ Copy database
        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(&dest)?;

            if compressed != dest {
                // remove uncompressed copy
                if let Err(e) = fs::remove_file(&dest) {
                    warning(format!("Failed to remove uncompressed backup: {}", e));
                }
            }

            compressed
        } else {
            dest
        };

        // 6️⃣ Log in DB
        if let Ok(pool) = open_db(&cfg.database) {
            ttlog_or_warn(
                &pool.conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(final_path)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rworkcycle.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
