//! PostgreSQL table writer for csv-pg-load.
//!
//! [`PostgreSQLWriter`] owns one connection and writes a whole
//! [`Dataset`](load_core::Dataset) into a table: drop (when replacing),
//! create, then batched multi-row INSERTs. By default all of it happens in a
//! single transaction.

pub mod args;
pub mod error;
pub mod insert;
pub mod writer;

pub use args::PostgreSQLWriteArgs;
pub use error::{PostgreSQLSinkError, WriteStage};
pub use insert::{DEFAULT_BATCH_SIZE, MAX_BIND_PARAMETERS};
pub use writer::{IfExists, PostgreSQLWriter, WriteMetrics, WriteOptions};

pub use postgresql_types::TableRef;
