//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Room not found: {0}")]
    RoomNotFound(i64),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date/time format: {0}")]
    InvalidDateTime(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    #[error("Invalid room state: {0}")]
    InvalidState(String),

    #[error("Invalid booking interval: {0}")]
    InvalidInterval(String),

    #[error("Quick booking rejected: {0}")]
    OutsideQuickWindow(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// True for error kinds that stem from bad user input rather than a
    /// broken environment. These are surfaced as a message at the CLI
    /// boundary and never reach the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDateTime(_)
                | AppError::InvalidTime(_)
                | AppError::InvalidRate(_)
                | AppError::InvalidState(_)
                | AppError::InvalidInterval(_)
                | AppError::OutsideQuickWindow(_)
        )
    }
}
