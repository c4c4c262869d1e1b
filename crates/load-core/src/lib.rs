//! Core types for csv-pg-load.
//!
//! This crate provides the typed column model shared by the CSV reader and
//! the PostgreSQL writer:
//!
//! - [`ColumnType`] - The scalar kind inferred for a column
//! - [`Value`] - A single cell value
//! - [`ColumnSchema`] - Column name, inferred type and nullability
//! - [`Dataset`] - An ordered set of columns plus ordered rows
//!
//! # Architecture
//!
//! ```text
//! load-core (this crate)
//!    │
//!    ├─── csv-types          (CSV string → Value, per-cell classification)
//!    ├─── csv-source         (CSV file → Dataset)
//!    └─── postgresql-types   (ColumnType → DDL, Value → ToSql)
//! ```
//!
//! # Example
//!
//! ```rust
//! use load_core::{ColumnSchema, ColumnType, Dataset, Value};
//!
//! let columns = vec![
//!     ColumnSchema::new("id", ColumnType::BigInt, false),
//!     ColumnSchema::new("text", ColumnType::Text, false),
//! ];
//! let rows = vec![vec![Value::BigInt(1), Value::text("good product")]];
//! let dataset = Dataset::new(columns, rows).unwrap();
//! assert_eq!(dataset.row_count(), 1);
//! ```

pub mod dataset;
pub mod types;
pub mod values;

pub use dataset::{ColumnSchema, Dataset, DatasetError};
pub use types::ColumnType;
pub use values::Value;
