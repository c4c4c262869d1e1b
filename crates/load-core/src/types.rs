//! Column type model.
//!
//! `ColumnType` covers what can be inferred from untyped CSV text: integers,
//! floats, booleans, and text for everything else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scalar kind of a column.
///
/// See [`ColumnType::widen`] for how cell types combine into a column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Boolean literal (`true` / `false`, any case)
    Bool,

    /// 64-bit signed integer
    BigInt,

    /// 64-bit IEEE 754 floating point
    Double,

    /// Unlimited text
    Text,
}

impl ColumnType {
    /// Combine the type seen so far with the type of another cell.
    ///
    /// ```rust
    /// use load_core::ColumnType;
    ///
    /// assert_eq!(ColumnType::BigInt.widen(ColumnType::Double), ColumnType::Double);
    /// assert_eq!(ColumnType::BigInt.widen(ColumnType::Bool), ColumnType::Text);
    /// ```
    pub fn widen(self, other: ColumnType) -> ColumnType {
        use ColumnType::*;
        match (self, other) {
            (a, b) if a == b => a,
            (BigInt, Double) | (Double, BigInt) => Double,
            _ => Text,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Bool => "bool",
            ColumnType::BigInt => "bigint",
            ColumnType::Double => "double",
            ColumnType::Text => "text",
        };
        f.write_str(name)
    }
}
