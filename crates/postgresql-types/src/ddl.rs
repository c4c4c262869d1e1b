//! PostgreSQL DDL generation from ColumnType.

use load_core::{ColumnSchema, ColumnType};
use std::fmt;

/// Quote an identifier, doubling any embedded double quotes.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// A possibly schema-qualified table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub schema: Option<String>,
    pub name: String,
}

impl TableRef {
    /// An unqualified table, resolved through the connection's search path.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// The quoted, optionally schema-qualified name for use in SQL.
    pub fn quoted(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", quote_ident(schema), quote_ident(&self.name)),
            None => quote_ident(&self.name),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{schema}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Trait for generating DDL type strings.
pub trait ToDdl {
    /// Convert a ColumnType to a DDL type string.
    fn to_ddl(&self, column_type: ColumnType) -> &'static str;

    /// Generate a complete CREATE TABLE statement.
    fn to_create_table(&self, table: &TableRef, columns: &[ColumnSchema]) -> String;
}

/// PostgreSQL DDL generator.
pub struct PostgreSQLDdl;

impl ToDdl for PostgreSQLDdl {
    fn to_ddl(&self, column_type: ColumnType) -> &'static str {
        match column_type {
            ColumnType::Bool => "BOOLEAN",
            ColumnType::BigInt => "BIGINT",
            ColumnType::Double => "DOUBLE PRECISION",
            ColumnType::Text => "TEXT",
        }
    }

    fn to_create_table(&self, table: &TableRef, columns: &[ColumnSchema]) -> String {
        let column_defs: Vec<String> = columns
            .iter()
            .map(|column| {
                let null_clause = if column.nullable { "NULL" } else { "NOT NULL" };
                format!(
                    "  {} {} {}",
                    quote_ident(&column.name),
                    self.to_ddl(column.column_type),
                    null_clause
                )
            })
            .collect();

        format!(
            "CREATE TABLE {} (\n{}\n)",
            table.quoted(),
            column_defs.join(",\n")
        )
    }
}

impl PostgreSQLDdl {
    /// Generate a DROP TABLE statement.
    ///
    /// Executing it destroys every row previously stored under this name.
    pub fn to_drop_table(&self, table: &TableRef) -> String {
        format!("DROP TABLE IF EXISTS {}", table.quoted())
    }
}
