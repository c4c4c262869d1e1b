//! The CSV → PostgreSQL load pipeline.
//!
//! A load is strictly sequential: parse the whole file, connect, then write.
//! Parsing happens before any connection is attempted, so an unreadable or
//! malformed file never touches the database.

use crate::config::{ConfigError, LoaderConfig};
use csv_pg_load_csv_source::{read_dataset, CsvOptions, CsvSourceError};
use csv_pg_load_postgresql::{PostgreSQLSinkError, PostgreSQLWriter};
use load_core::{ColumnSchema, Dataset};
use postgresql_types::TableRef;
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::info;

/// Pipeline progress, reported once per stage in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    ParseStarted,
    ParseFinished { rows: usize, columns: usize },
    Connected,
    UploadFinished { rows: u64 },
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ParseStarted => f.write_str("CSV parsing started..."),
            Stage::ParseFinished { .. } => {
                f.write_str("CSV has been read, connecting to database...")
            }
            Stage::Connected => f.write_str("Database connected, upload started..."),
            Stage::UploadFinished { .. } => f.write_str("Successfully uploaded to Postgres DB!"),
        }
    }
}

/// Why a load failed. Each variant names the stage that failed.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("read failed: {0}")]
    Io(#[source] CsvSourceError),

    #[error("parse failed: {0}")]
    Parse(#[source] CsvSourceError),

    #[error("connect failed: {0}")]
    Connection(#[source] PostgreSQLSinkError),

    #[error("write failed: {0}")]
    Write(#[source] PostgreSQLSinkError),
}

impl From<CsvSourceError> for LoadError {
    fn from(e: CsvSourceError) -> Self {
        if e.is_io() {
            Self::Io(e)
        } else {
            Self::Parse(e)
        }
    }
}

impl From<PostgreSQLSinkError> for LoadError {
    fn from(e: PostgreSQLSinkError) -> Self {
        if e.is_connection() {
            Self::Connection(e)
        } else {
            Self::Write(e)
        }
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Target table
    pub table: TableRef,
    /// Columns as created (or appended to)
    pub columns: Vec<ColumnSchema>,
    /// Rows written
    pub rows_inserted: u64,
    /// INSERT statements executed
    pub batch_count: u64,
    /// Whether a previous table of the same name was dropped
    pub dropped_existing: bool,
    pub parse_duration: Duration,
    pub write_duration: Duration,
}

/// Parse a CSV file into a dataset.
pub fn parse(source: &Path, options: &CsvOptions) -> Result<Dataset, LoadError> {
    Ok(read_dataset(source, options)?)
}

/// Load `source` into `table`, printing each stage to stdout.
///
/// With the default [`IfExists::Replace`](csv_pg_load_postgresql::IfExists)
/// policy any existing table named `table` is dropped and its contents are
/// lost.
pub async fn run(
    config: &LoaderConfig,
    source: &Path,
    table: &TableRef,
) -> Result<LoadReport, LoadError> {
    run_with_progress(config, source, table, |stage| println!("{stage}")).await
}

/// Load `source` into `table`, reporting each stage to `progress`.
pub async fn run_with_progress<F>(
    config: &LoaderConfig,
    source: &Path,
    table: &TableRef,
    mut progress: F,
) -> Result<LoadReport, LoadError>
where
    F: FnMut(&Stage),
{
    let pg_config = config.database.to_pg_config()?;

    info!("Loading {} into table '{}'", source.display(), table);
    progress(&Stage::ParseStarted);

    let parse_start = Instant::now();
    let dataset = parse(source, &config.csv)?;
    let parse_duration = parse_start.elapsed();
    progress(&Stage::ParseFinished {
        rows: dataset.row_count(),
        columns: dataset.column_count(),
    });

    info!(
        "Connecting to {}",
        config.database.redacted_connection_string()
    );
    let mut writer = PostgreSQLWriter::connect(&pg_config, config.connect_timeout).await?;
    progress(&Stage::Connected);

    let result = writer.load_dataset(table, &dataset, &config.write).await;
    writer.close().await;
    let metrics = result?;

    progress(&Stage::UploadFinished {
        rows: metrics.rows_inserted,
    });

    Ok(LoadReport {
        table: table.clone(),
        columns: dataset.columns().to_vec(),
        rows_inserted: metrics.rows_inserted,
        batch_count: metrics.batch_count,
        dropped_existing: metrics.dropped_existing,
        parse_duration,
        write_duration: metrics.total_duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_messages() {
        assert_eq!(Stage::ParseStarted.to_string(), "CSV parsing started...");
        assert_eq!(
            Stage::ParseFinished {
                rows: 2,
                columns: 2
            }
            .to_string(),
            "CSV has been read, connecting to database..."
        );
        assert_eq!(
            Stage::Connected.to_string(),
            "Database connected, upload started..."
        );
        assert_eq!(
            Stage::UploadFinished { rows: 2 }.to_string(),
            "Successfully uploaded to Postgres DB!"
        );
    }

    #[test]
    fn test_sink_error_classification() {
        let err: LoadError =
            PostgreSQLSinkError::ConnectTimeout(Duration::from_secs(1)).into();
        assert!(matches!(err, LoadError::Connection(_)));

        let err: LoadError = PostgreSQLSinkError::TableExists("t".to_string()).into();
        assert!(matches!(err, LoadError::Write(_)));
        assert_eq!(err.to_string(), "write failed: Table 't' already exists");
    }

    #[test]
    fn test_csv_error_classification() {
        let err: LoadError = CsvSourceError::MissingHeader("x.csv".to_string()).into();
        assert!(matches!(err, LoadError::Parse(_)));

        let err: LoadError = CsvSourceError::Open {
            path: "x.csv".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .into();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
