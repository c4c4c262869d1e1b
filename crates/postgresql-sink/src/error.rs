//! Error types for the PostgreSQL writer.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// The write step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    Begin,
    Check,
    Drop,
    Create,
    Insert,
    Commit,
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WriteStage::Begin => "begin transaction for",
            WriteStage::Check => "check existence of",
            WriteStage::Drop => "drop",
            WriteStage::Create => "create",
            WriteStage::Insert => "insert into",
            WriteStage::Commit => "commit",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while writing to PostgreSQL.
#[derive(Error, Debug)]
pub enum PostgreSQLSinkError {
    /// Connecting or authenticating failed.
    #[error("Connection error: {0}")]
    Connect(#[source] tokio_postgres::Error),

    /// The connection was not established in time.
    #[error("Timed out connecting to PostgreSQL after {0:?}")]
    ConnectTimeout(Duration),

    /// The table exists and the policy forbids touching it.
    #[error("Table '{0}' already exists")]
    TableExists(String),

    /// A statement failed during drop/create/insert.
    #[error("Failed to {stage} table '{table}': {source}")]
    Write {
        stage: WriteStage,
        table: String,
        #[source]
        source: tokio_postgres::Error,
    },

    /// Other PostgreSQL query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),
}

impl PostgreSQLSinkError {
    /// Whether the error happened before any table was touched.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connect(_) | Self::ConnectTimeout(_))
    }

    pub(crate) fn write(
        stage: WriteStage,
        table: impl ToString,
    ) -> impl FnOnce(tokio_postgres::Error) -> Self {
        let table = table.to_string();
        move |source| Self::Write {
            stage,
            table,
            source,
        }
    }
}
