//! CSV file reading for csv-pg-load
//!
//! This crate reads a whole CSV file into a typed [`Dataset`]: the header
//! defines the columns, every following record is one row, and each column's
//! type is inferred from all of its fields before any value is converted.
//!
//! [`Dataset`]: load_core::Dataset

mod error;
mod reader;

pub use error::CsvSourceError;
pub use reader::{read_dataset, read_dataset_from_reader, CsvOptions, MAX_COLUMN_NAME_BYTES};

// Re-export for callers configuring null handling
pub use csv_types::NullTokens;
