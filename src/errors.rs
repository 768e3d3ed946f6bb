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

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Reference data
    // ---------------------------
    #[error("Reference file not found: {0}")]
    MissingReferenceFile(String),

    #[error("Invalid reference file {file}: missing column '{column}'")]
    InvalidReference { file: String, column: String },

    // ---------------------------
    // Ledger
    // ---------------------------
    #[error("No recent clock-in record found for coach '{0}'")]
    NoOpenShift(String),

    #[error("Failed to save ledger to {path}: {reason}")]
    PersistFailure { path: String, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0} (expected YYYY-MM-DD HH:MM[:SS])")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

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
