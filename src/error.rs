use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid bind address \"{input}\" (expected HOST:PORT)")]
    InvalidBind { input: String },

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Server error: {0}")]
    Server(std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while reading the visit CSV. All of them are fatal at startup.
#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("Data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("Missing required column \"{column}\"")]
    MissingColumn { column: &'static str },

    #[error("Row {row}: cannot parse timestamp \"{value}\"")]
    InvalidTimestamp { row: usize, value: String },

    #[error("Row {row}: interactions \"{value}\" is not a number")]
    InvalidInteractions { row: usize, value: String },
}
