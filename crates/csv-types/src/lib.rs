//! CSV type conversions for load-core types.
//!
//! This crate turns raw CSV field strings into load-core's [`Value`]s. It is
//! used in two passes by the CSV reader:
//!
//! 1. [`classify`] every non-null cell and widen the results into a
//!    [`ColumnType`] per column.
//! 2. Convert every cell with [`csv_string_to_value`] against the column's
//!    final type.
//!
//! # Example
//!
//! ```rust
//! use csv_types::{classify, csv_string_to_value, NullTokens};
//! use load_core::{ColumnType, Value};
//!
//! let nulls = NullTokens::default();
//! assert_eq!(classify("42"), ColumnType::BigInt);
//! assert_eq!(
//!     csv_string_to_value("42", ColumnType::Double, &nulls).unwrap(),
//!     Value::Double(42.0)
//! );
//! ```
//!
//! [`Value`]: load_core::Value
//! [`ColumnType`]: load_core::ColumnType

pub mod reverse;

pub use reverse::{classify, csv_string_to_value, infer_column_type, CsvParseError, NullTokens};
