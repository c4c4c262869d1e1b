//! Error types for CSV reading.

use csv_types::CsvParseError;
use load_core::DatasetError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a CSV file into a dataset.
#[derive(Error, Debug)]
pub enum CsvSourceError {
    /// The file could not be opened.
    #[error("Failed to open CSV file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input has no header record.
    #[error("CSV from {0} has no header row")]
    MissingHeader(String),

    /// A record's field count differs from the header's.
    #[error(
        "Column count mismatch in CSV line {line}: expected {expected} columns ({headers}), but found {found} columns"
    )]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
        headers: String,
    },

    /// A header name cannot be used as a column name.
    #[error("CSV column '{name}' cannot be used as a column name: {reason}")]
    ColumnName { name: String, reason: &'static str },

    /// A field could not be converted to its column's type.
    #[error("CSV line {line}, column '{column}': {source}")]
    Value {
        line: u64,
        column: String,
        #[source]
        source: CsvParseError,
    },

    /// Low-level CSV error (I/O while reading, invalid UTF-8).
    #[error("Failed to read CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// The parsed rows do not form a valid dataset.
    #[error("Invalid dataset: {0}")]
    Dataset(#[from] DatasetError),
}

impl CsvSourceError {
    /// Whether this error came from the filesystem rather than from the
    /// content of the file.
    pub fn is_io(&self) -> bool {
        match self {
            Self::Open { .. } => true,
            Self::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(_)),
            _ => false,
        }
    }
}
