//! Whole-file CSV reading
//!
//! The file is read completely before any type is decided, so a column that
//! turns textual on its last row is still typed as text.

use crate::error::CsvSourceError;
use csv::StringRecord;
use csv_types::{csv_string_to_value, infer_column_type, NullTokens};
use load_core::{ColumnSchema, Dataset, Value};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// PostgreSQL truncates identifiers longer than this many bytes.
pub const MAX_COLUMN_NAME_BYTES: usize = 63;

/// Configuration for CSV reading
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// CSV delimiter character (default: ',')
    pub delimiter: u8,

    /// Field values read as null in addition to the empty string
    pub null_tokens: NullTokens,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_tokens: NullTokens::default(),
        }
    }
}

/// Read a CSV file into a typed dataset.
pub fn read_dataset(path: &Path, options: &CsvOptions) -> Result<Dataset, CsvSourceError> {
    let file = File::open(path).map_err(|source| CsvSourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_dataset_from_reader(file, &path.display().to_string(), options)
}

/// Read CSV data from any reader into a typed dataset.
///
/// `source_name` is only used in log lines and error messages.
pub fn read_dataset_from_reader<R: Read>(
    reader: R,
    source_name: &str,
    options: &CsvOptions,
) -> Result<Dataset, CsvSourceError> {
    info!("Processing CSV from: {source_name}");

    // Column counts are checked below so the error can name the line
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let raw_headers = csv_reader.headers()?.clone();
    if raw_headers.is_empty() {
        return Err(CsvSourceError::MissingHeader(source_name.to_string()));
    }
    let headers = normalize_headers(&raw_headers);
    for name in &headers {
        check_column_name(name)?;
    }
    debug!("CSV headers/columns: {headers:?}");

    let mut records: Vec<StringRecord> = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if record.len() != headers.len() {
            return Err(CsvSourceError::ColumnCount {
                line: record_line(&record),
                expected: headers.len(),
                found: record.len(),
                headers: headers.join(", "),
            });
        }
        records.push(record);
    }

    let columns: Vec<ColumnSchema> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let (column_type, nullable) =
                infer_column_type(records.iter().map(|r| &r[i]), &options.null_tokens);
            ColumnSchema::new(name.clone(), column_type, nullable)
        })
        .collect();

    for column in &columns {
        debug!(
            "Column '{}' inferred as {} (nullable: {})",
            column.name, column.column_type, column.nullable
        );
    }

    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(records.len());
    for record in &records {
        let row = record
            .iter()
            .zip(&columns)
            .map(|(field, column)| {
                csv_string_to_value(field, column.column_type, &options.null_tokens).map_err(
                    |source| CsvSourceError::Value {
                        line: record_line(record),
                        column: column.name.clone(),
                        source,
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    let dataset = Dataset::new(columns, rows)?;
    info!(
        "Read {} records with {} columns from {source_name}",
        dataset.row_count(),
        dataset.column_count()
    );
    Ok(dataset)
}

/// Name blank header cells `Unnamed: {index}` and suffix repeated names with
/// `.1`, `.2`, ... so every column name is unique.
fn normalize_headers(raw: &StringRecord) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(raw.len());

    for (i, name) in raw.iter().enumerate() {
        let base = if name.is_empty() {
            format!("Unnamed: {i}")
        } else {
            name.to_string()
        };

        let mut candidate = base.clone();
        if used.contains(&candidate) {
            let n = suffixes.entry(base.clone()).or_insert(0);
            loop {
                *n += 1;
                candidate = format!("{base}.{n}");
                if !used.contains(&candidate) {
                    break;
                }
            }
        }

        used.insert(candidate.clone());
        headers.push(candidate);
    }

    headers
}

fn check_column_name(name: &str) -> Result<(), CsvSourceError> {
    let reason = if name.len() > MAX_COLUMN_NAME_BYTES {
        "name is longer than 63 bytes"
    } else if name.contains('\0') {
        "name contains a NUL character"
    } else {
        return Ok(());
    };
    Err(CsvSourceError::ColumnName {
        name: name.to_string(),
        reason,
    })
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}
