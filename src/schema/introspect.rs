//! Schema Introspector
//!
//! Catalog queries over `information_schema`, scoped to the public schema.
//! Identifier columns are cast to `text` in SQL because the driver cannot
//! decode the `sql_identifier` domain directly.

use sqlx::PgPool;

use crate::error::ApiResult;
use crate::schema::{ColumnDescriptor, TableDescriptor};

/// List all table names in the public schema, sorted lexicographically.
pub async fn list_tables(pool: &PgPool) -> ApiResult<Vec<String>> {
    let tables = sqlx::query_scalar::<_, String>(
        "SELECT table_name::text
         FROM information_schema.tables
         WHERE table_schema = 'public'
         ORDER BY table_name",
    )
    .fetch_all(pool)
    .await?;

    Ok(tables)
}

/// List the columns of a table in ordinal position order.
///
/// The ordering is load-bearing: positional row values from `SELECT *` are
/// zipped against exactly this sequence.
pub async fn list_columns(pool: &PgPool, table: &str) -> ApiResult<Vec<ColumnDescriptor>> {
    let rows = sqlx::query_as::<_, (String, String)>(
        "SELECT column_name::text, data_type::text
         FROM information_schema.columns
         WHERE table_schema = 'public' AND table_name = $1
         ORDER BY ordinal_position",
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(name, data_type)| ColumnDescriptor { name, data_type })
        .collect())
}

/// Describe a table: its name plus columns in ordinal position order.
pub async fn describe_table(pool: &PgPool, table: &str) -> ApiResult<TableDescriptor> {
    let columns = list_columns(pool, table).await?;

    Ok(TableDescriptor {
        name: table.to_string(),
        columns,
    })
}

/// Whether a table exists in the public schema.
pub async fn table_exists(pool: &PgPool, table: &str) -> ApiResult<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (
             SELECT 1 FROM information_schema.tables
             WHERE table_schema = 'public' AND table_name = $1
         )",
    )
    .bind(table)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}
