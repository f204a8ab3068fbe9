//! Unified application error type.
//! Ingestion, the record store, config and the CLI return AppError so the
//! error handling stays consistent. The aggregation engine never fails and
//! does not use it.

use crate::models::record::RowId;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Ingestion errors
    // ---------------------------
    #[error("No valid data found. Make sure to paste tab-separated values.")]
    NoValidRows,

    // ---------------------------
    // Record store errors
    // ---------------------------
    #[error("No row with id {0}")]
    RowNotFound(RowId),

    #[error("Invalid row id: {0}")]
    InvalidRowId(String),

    #[error("Invalid sequence number: {0}")]
    InvalidSequenceNumber(String),

    #[error("Unknown field '{0}'. Use one of: sequence, name, reg, date, time")]
    InvalidField(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
