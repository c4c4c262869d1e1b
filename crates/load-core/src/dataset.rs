//! In-memory tabular dataset.

use crate::types::ColumnType;
use crate::values::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised when a dataset's rows disagree with its columns.
#[derive(Error, Debug, PartialEq)]
pub enum DatasetError {
    /// A dataset needs at least one column.
    #[error("dataset has no columns")]
    NoColumns,

    /// Two columns share a name.
    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// A row has the wrong number of values.
    #[error("row {row} has {found} values, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A value does not match its column's type.
    #[error("row {row}, column '{column}': value does not fit column type {expected}")]
    TypeMismatch {
        row: usize,
        column: String,
        expected: ColumnType,
    },
}

/// Schema of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name, taken from the CSV header
    pub name: String,

    /// Inferred scalar type
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    /// Whether the column contains at least one null
    pub nullable: bool,
}

impl ColumnSchema {
    pub fn new(name: impl Into<String>, column_type: ColumnType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable,
        }
    }
}

/// An ordered set of typed columns plus ordered rows.
///
/// Every row holds exactly one [`Value`] per column, and every non-null value
/// matches its column's [`ColumnType`]. Both properties are checked once in
/// [`Dataset::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<ColumnSchema>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Build a dataset, validating row widths and value types.
    pub fn new(columns: Vec<ColumnSchema>, rows: Vec<Vec<Value>>) -> Result<Self, DatasetError> {
        if columns.is_empty() {
            return Err(DatasetError::NoColumns);
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(DatasetError::DuplicateColumn(column.name.clone()));
            }
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DatasetError::RowWidth {
                    row: row_index,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
            for (value, column) in row.iter().zip(&columns) {
                if !value.fits(column.column_type) || (value.is_null() && !column.nullable) {
                    return Err(DatasetError::TypeMismatch {
                        row: row_index,
                        column: column.name.clone(),
                        expected: column.column_type,
                    });
                }
            }
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
