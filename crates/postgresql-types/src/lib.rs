//! PostgreSQL type conversions for load-core types.
//!
//! # Modules
//!
//! - [`forward`] - Value → PostgreSQL bind parameter
//! - [`ddl`] - PostgreSQL DDL generation from ColumnType
//!
//! # Example
//!
//! ```rust
//! use load_core::ColumnType;
//! use postgresql_types::{PostgreSQLDdl, ToDdl};
//!
//! let ddl = PostgreSQLDdl;
//! assert_eq!(ddl.to_ddl(ColumnType::Text), "TEXT");
//! ```

pub mod ddl;
pub mod forward;

pub use ddl::{quote_ident, PostgreSQLDdl, TableRef, ToDdl};
pub use forward::PostgreSQLValue;
