//! Batched INSERT logic for PostgreSQL writes.

use load_core::{ColumnSchema, Value};
use postgresql_types::{quote_ident, PostgreSQLValue, TableRef};
use tokio_postgres::types::ToSql;
use tokio_postgres::GenericClient;

/// Default batch size for INSERT operations.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// PostgreSQL's limit on bind parameters per statement.
pub const MAX_BIND_PARAMETERS: usize = 65535;

/// Rows per statement, honoring the bind parameter limit.
pub fn effective_batch_size(batch_size: usize, column_count: usize) -> usize {
    let max_rows = MAX_BIND_PARAMETERS / column_count.max(1);
    batch_size.clamp(1, max_rows.max(1))
}

/// Generate a multi-row INSERT statement with `$n` placeholders.
pub fn generate_insert(table: &TableRef, columns: &[ColumnSchema], row_count: usize) -> String {
    let col_count = columns.len();
    let mut placeholders: Vec<String> = Vec::with_capacity(row_count);
    let mut param_idx = 1;

    for _ in 0..row_count {
        let row_placeholders: Vec<String> = (0..col_count)
            .map(|_| {
                let p = format!("${param_idx}");
                param_idx += 1;
                p
            })
            .collect();
        placeholders.push(format!("({})", row_placeholders.join(", ")));
    }

    format!(
        "INSERT INTO {} ({}) VALUES {}",
        table.quoted(),
        columns
            .iter()
            .map(|c| quote_ident(&c.name))
            .collect::<Vec<_>>()
            .join(", "),
        placeholders.join(", ")
    )
}

/// Insert a batch of rows into a PostgreSQL table.
pub async fn insert_batch<C: GenericClient>(
    client: &C,
    table: &TableRef,
    columns: &[ColumnSchema],
    rows: &[Vec<Value>],
) -> Result<u64, tokio_postgres::Error> {
    if rows.is_empty() {
        return Ok(0);
    }

    let sql = generate_insert(table, columns, rows.len());

    let params: Vec<PostgreSQLValue<'_>> = rows.iter().flatten().map(PostgreSQLValue).collect();
    let param_refs: Vec<&(dyn ToSql + Sync)> =
        params.iter().map(|p| p as &(dyn ToSql + Sync)).collect();

    client.execute(sql.as_str(), &param_refs).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use load_core::ColumnType;

    fn reviews_columns() -> Vec<ColumnSchema> {
        vec![
            ColumnSchema::new("id", ColumnType::BigInt, false),
            ColumnSchema::new("text", ColumnType::Text, false),
        ]
    }

    #[test]
    fn test_generate_insert() {
        let sql = generate_insert(&TableRef::new("amazonreviews"), &reviews_columns(), 2);
        assert_eq!(
            sql,
            "INSERT INTO \"amazonreviews\" (\"id\", \"text\") VALUES ($1, $2), ($3, $4)"
        );
    }

    #[test]
    fn test_generate_insert_qualified() {
        let table = TableRef::new("reviews").with_schema("staging");
        let sql = generate_insert(&table, &reviews_columns()[..1], 1);
        assert_eq!(sql, "INSERT INTO \"staging\".\"reviews\" (\"id\") VALUES ($1)");
    }

    #[test]
    fn test_effective_batch_size() {
        assert_eq!(effective_batch_size(1000, 2), 1000);
        assert_eq!(effective_batch_size(100_000, 10), 6553);
        assert_eq!(effective_batch_size(0, 3), 1);
        assert_eq!(effective_batch_size(10, 100_000), 1);
    }
}
