use crate::core::calculator::policy::Rules;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{DayExport, ExportFormat};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

pub struct ExportLogic;

impl ExportLogic {
    /// Rows for every day of the current cycle, in cycle order.
    pub fn rows(state: &AppState, rules: &Rules) -> Vec<DayExport> {
        state
            .records()
            .iter()
            .map(|r| DayExport::from_record(r, state.cycle_start(), rules))
            .collect()
    }

    /// Write the current cycle to `file`. Returns the written path.
    pub fn export(
        state: &AppState,
        rules: &Rules,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = expand_tilde(file);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(&path, force)?;

        let rows = Self::rows(state, rules);
        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(path)
    }
}
