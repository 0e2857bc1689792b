//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
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
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Invalid route definition: {0}")]
    InvalidRoute(String),

    // ---------------------------
    // Attendance transition refusals.
    // Each one carries the user-facing reason; a refused transition
    // never mutates or persists the session.
    // ---------------------------
    #[error("Boarding time has passed; requests can no longer be made or cancelled")]
    StateLock,

    #[error("Another attendance selection is already active")]
    Conflict,

    #[error("Past dates cannot be changed")]
    DateInPast(String),

    #[error("Today's attendance must be changed with the direct late/absent commands")]
    DateIsToday(String),

    #[error("The shuttle does not operate on {0}")]
    NonOperationDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

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
    /// True for the transition refusals of the attendance state machine.
    /// These are surfaced as user notices, never as process failures.
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            AppError::StateLock
                | AppError::Conflict
                | AppError::DateInPast(_)
                | AppError::DateIsToday(_)
                | AppError::NonOperationDay(_)
        )
    }
}
