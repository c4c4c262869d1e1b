//! Command-line interface for csv-pg-load
//!
//! # Usage Examples
//!
//! ```bash
//! # Replace table "amazonreviews" with the contents of Reviews.csv
//! csv-pg-load --file Reviews.csv --table amazonreviews
//!
//! # Keep an existing table and append to it, 500 rows per INSERT
//! csv-pg-load --file more.csv --table amazonreviews --if-exists append --batch-size 500
//!
//! # Only show the inferred column types
//! csv-pg-load --file Reviews.csv --dry-run
//! ```
//!
//! Connection settings come from `POSTGRES_USER`, `POSTGRES_PASSWORD`,
//! `POSTGRES_HOST` and `POSTGRES_DB`, or from a `.env` file in the working
//! directory.

use clap::Parser;
use csv_pg_load::config::{self, parse_duration, DatabaseConfig, DatabaseOpts, LoaderConfig};
use csv_pg_load::csv::{CsvOptions, NullTokens};
use csv_pg_load::loader::{self, LoadError};
use csv_pg_load::postgresql::{PostgreSQLWriteArgs, WriteOptions};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "csv-pg-load")]
#[command(
    about = "Load a CSV file into a PostgreSQL table, replacing any existing table of the same name"
)]
#[command(long_about = None)]
struct Cli {
    /// CSV file to load
    #[arg(long, env = "CSV_FILE", value_name = "FILE")]
    file: PathBuf,

    /// Target table name
    #[arg(long, env = "CSV_TABLE", default_value = "amazonreviews")]
    table: String,

    /// Target PostgreSQL schema (default: the connection's search path)
    #[arg(long)]
    schema: Option<String>,

    /// PostgreSQL connection options
    #[command(flatten)]
    database: DatabaseOpts,

    /// CSV delimiter character (default: ',')
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Field value to read as null in addition to the empty string (repeatable)
    #[arg(long = "null-value", value_name = "TOKEN")]
    null_values: Vec<String>,

    /// Maximum time to connect and authenticate
    /// Format: duration in seconds or with units like "30s", "5m", "1h"
    #[arg(long, default_value = "10s", value_parser = parse_duration)]
    connect_timeout: Duration,

    /// PostgreSQL write options
    #[command(flatten)]
    write: PostgreSQLWriteArgs,

    /// Parse the CSV and print the inferred schema without touching the database
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Variables already set in the environment take precedence over .env
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let table =
        config::table_ref(&cli.table, cli.schema.as_deref()).map_err(LoadError::Config)?;
    let csv_options = CsvOptions {
        delimiter: config::delimiter_byte(cli.delimiter).map_err(LoadError::Config)?,
        null_tokens: NullTokens::new(cli.null_values),
    };

    if cli.dry_run {
        tracing::info!("Running in dry-run mode - no database access");
        let dataset = loader::parse(&cli.file, &csv_options)?;
        let summary = serde_json::json!({
            "source": cli.file.display().to_string(),
            "table": table.to_string(),
            "rows": dataset.row_count(),
            "columns": dataset.columns(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    // Validated before the file is touched
    let database = DatabaseConfig::try_from(&cli.database).map_err(LoadError::Config)?;

    let loader_config = LoaderConfig {
        database,
        csv: csv_options,
        write: WriteOptions::from(&cli.write),
        connect_timeout: cli.connect_timeout,
    };

    let report = loader::run(&loader_config, &cli.file, &table).await?;

    tracing::info!(
        "Loaded {} rows into '{}' ({} columns, {} batches, parse {:?}, write {:?})",
        report.rows_inserted,
        report.table,
        report.columns.len(),
        report.batch_count,
        report.parse_duration,
        report.write_duration
    );

    Ok(())
}
