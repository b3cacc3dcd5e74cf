//! Error types for catalogue loading, writing and manipulation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, reading or writing a catalogue
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("required column '{0}' not found in table")]
    MissingColumn(String),
    #[error("column '{0}' already exists in table")]
    DuplicateColumn(String),
    #[error("column '{column}' has {found} rows, table has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("cannot parse value '{value}' in column '{column}' at row {row}")]
    Parse {
        column: String,
        row: usize,
        value: String,
    },
    #[error("FITS I/O error: {0}")]
    Fits(#[from] fitsio::compat::errors::Error),
    #[error("invalid FITS column '{column}': {reason}")]
    InvalidFits { column: String, reason: String },
    #[error("{0} tables can only be read from and written to files")]
    RequiresFile(String),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}
