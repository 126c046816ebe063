//! Error types for Podium.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Podium operations.
pub type Result<T> = std::result::Result<T, PodiumError>;

/// Errors that can occur in Podium.
#[derive(Debug, Error)]
pub enum PodiumError {
    /// Failed to open the dataset file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the CSV header.
    #[error("Missing column: {name}")]
    MissingColumn { name: String },

    /// A cell could not be interpreted as the expected type.
    #[error("Bad record on line {line}: {message}")]
    BadRecord { line: u64, message: String },

    /// The dataset contains no rows.
    #[error("Dataset is empty: {path}")]
    EmptyDataset { path: PathBuf },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PodiumError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a MissingColumn error.
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn { name: name.into() }
    }

    /// Create a BadRecord error.
    pub fn bad_record(line: u64, message: impl Into<String>) -> Self {
        Self::BadRecord {
            line,
            message: message.into(),
        }
    }
}
