//! CLI argument definitions for the PostgreSQL writer.

use crate::writer::{IfExists, WriteOptions};
use clap::Args;

/// PostgreSQL write arguments.
#[derive(Args, Clone, Debug)]
pub struct PostgreSQLWriteArgs {
    /// Number of rows per INSERT statement
    #[arg(long, default_value = "1000")]
    pub batch_size: usize,

    /// What to do when the target table already exists
    #[arg(long, value_enum, default_value_t = IfExists::Replace)]
    pub if_exists: IfExists,

    /// Write without a wrapping transaction (a failure may leave the table
    /// dropped, empty or partially populated)
    #[arg(long)]
    pub no_transaction: bool,
}

impl From<&PostgreSQLWriteArgs> for WriteOptions {
    fn from(args: &PostgreSQLWriteArgs) -> Self {
        Self {
            batch_size: args.batch_size,
            if_exists: args.if_exists,
            transactional: !args.no_transaction,
        }
    }
}
