//! csv-pg-load Library
//!
//! Loads one CSV file into one PostgreSQL table, replacing any existing table
//! of the same name.
//!
//! # Pipeline
//!
//! 1. Configuration is validated once ([`config::DatabaseConfig`]).
//! 2. The whole CSV is parsed into a typed [`Dataset`]; every column's type is
//!    inferred from all of its values.
//! 3. A single connection is opened.
//! 4. The table is dropped, recreated from the dataset's columns and filled
//!    with batched INSERTs, inside one transaction by default.
//!
//! # CLI Usage
//!
//! ```bash
//! POSTGRES_USER=postgres POSTGRES_PASSWORD=postgres \
//! POSTGRES_HOST=localhost:5432 POSTGRES_DB=reviews \
//! csv-pg-load --file Reviews.csv --table amazonreviews
//! ```

pub mod config;
pub mod loader;

// Re-export the workspace crates for convenience
pub use csv_pg_load_csv_source as csv;
pub use csv_pg_load_postgresql as postgresql;

pub use config::{ConfigError, DatabaseConfig, DatabaseOpts, LoaderConfig};
pub use load_core::{ColumnSchema, ColumnType, Dataset, Value};
pub use loader::{run, run_with_progress, LoadError, LoadReport, Stage};
pub use postgresql_types::TableRef;
