//! Reverse conversion: CSV string → Value.

use load_core::{ColumnType, Value};
use thiserror::Error;

/// Error type for CSV field conversion failures.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to parse '{value}' as {expected_type}")]
pub struct CsvParseError {
    pub value: String,
    pub expected_type: ColumnType,
}

/// Field values that are read as null.
///
/// The empty string is always null. Extra tokens (for example `NA` or
/// `NULL`) can be added and are matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullTokens {
    extra: Vec<String>,
}

impl NullTokens {
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra: extra.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_null(&self, value: &str) -> bool {
        value.is_empty() || self.extra.iter().any(|token| token == value)
    }
}

/// Classify a single non-null field.
///
/// Integers win over floats, floats over booleans; anything else is text.
/// Float spellings without a digit (`inf`, `NaN`) are kept as text so that
/// a column of words never turns numeric.
pub fn classify(value: &str) -> ColumnType {
    if value.parse::<i64>().is_ok() {
        return ColumnType::BigInt;
    }

    if looks_numeric(value) && value.parse::<f64>().is_ok() {
        return ColumnType::Double;
    }

    if parse_bool(value).is_some() {
        return ColumnType::Bool;
    }

    ColumnType::Text
}

/// Infer a column type from its fields.
///
/// Returns the widened type of every non-null field and whether any field
/// was null. A column with no non-null fields is text.
pub fn infer_column_type<'a, I>(fields: I, nulls: &NullTokens) -> (ColumnType, bool)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut inferred: Option<ColumnType> = None;
    let mut nullable = false;

    for field in fields {
        if nulls.is_null(field) {
            nullable = true;
            continue;
        }
        let cell_type = classify(field);
        inferred = Some(match inferred {
            Some(current) => current.widen(cell_type),
            None => cell_type,
        });
    }

    (inferred.unwrap_or(ColumnType::Text), nullable)
}

/// Parse a CSV field according to its column type.
pub fn csv_string_to_value(
    value: &str,
    column_type: ColumnType,
    nulls: &NullTokens,
) -> Result<Value, CsvParseError> {
    if nulls.is_null(value) {
        return Ok(Value::Null);
    }

    let parsed = match column_type {
        ColumnType::Bool => parse_bool(value).map(Value::Bool),
        ColumnType::BigInt => value.parse::<i64>().ok().map(Value::BigInt),
        ColumnType::Double => {
            if looks_numeric(value) {
                value.parse::<f64>().ok().map(Value::Double)
            } else {
                None
            }
        }
        ColumnType::Text => Some(Value::text(value)),
    };

    parsed.ok_or_else(|| CsvParseError {
        value: value.to_string(),
        expected_type: column_type,
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn looks_numeric(value: &str) -> bool {
    value.bytes().any(|b| b.is_ascii_digit())
}
