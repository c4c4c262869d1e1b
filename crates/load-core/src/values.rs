//! Cell values.

use crate::types::ColumnType;
use serde::Serialize;

/// A single cell of a [`Dataset`](crate::Dataset).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Empty field or configured null token
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    BigInt(i64),

    /// 64-bit floating point
    Double(f64),

    /// Text value
    Text(String),
}

impl Value {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The type of this value, or `None` for null.
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(ColumnType::Bool),
            Self::BigInt(_) => Some(ColumnType::BigInt),
            Self::Double(_) => Some(ColumnType::Double),
            Self::Text(_) => Some(ColumnType::Text),
        }
    }

    /// Whether this value can be stored in a column of the given type.
    pub fn fits(&self, column_type: ColumnType) -> bool {
        match self.column_type() {
            None => true,
            Some(t) => t == column_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_fits_every_type() {
        assert!(Value::Null.fits(ColumnType::Bool));
        assert!(Value::Null.fits(ColumnType::Text));
    }

    #[test]
    fn test_fits_requires_exact_type() {
        assert!(Value::BigInt(1).fits(ColumnType::BigInt));
        assert!(!Value::BigInt(1).fits(ColumnType::Double));
        assert!(!Value::text("x").fits(ColumnType::BigInt));
    }

    #[test]
    fn test_serialize_untagged() {
        let row = vec![Value::BigInt(1), Value::text("good"), Value::Null];
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"[1,"good",null]"#);
    }
}
