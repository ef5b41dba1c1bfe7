// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::list_history;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::HistoryExport;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export logic for the release history.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the history table, newest entry first.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: output path; `~` is expanded, relative paths rejected
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let entries: Vec<HistoryExport> = list_history(pool)?
            .iter()
            .map(HistoryExport::from)
            .collect();

        if entries.is_empty() {
            warning("No archived bookings to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&entries, &path)?,
            ExportFormat::Json => export_json(&entries, &path)?,
        }

        Ok(())
    }
}
