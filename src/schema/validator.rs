//! Identifier Validator
//!
//! Client-supplied table and column names are structural identifiers, not
//! bindable parameters. Before any identifier reaches a SQL string it must
//! pass an exact-match membership test against the live catalog. A failing
//! catalog query propagates as a database error, never as "invalid name".

use sqlx::PgPool;

use crate::error::ApiResult;
use crate::schema::introspect;

/// Exact-match test of a table name against the public schema catalog.
pub async fn is_allowed_table(pool: &PgPool, name: &str) -> ApiResult<bool> {
    introspect::table_exists(pool, name).await
}

/// Exact-match test of a column name against a table's live column set.
pub async fn is_allowed_column(pool: &PgPool, table: &str, name: &str) -> ApiResult<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (
             SELECT 1 FROM information_schema.columns
             WHERE table_schema = 'public' AND table_name = $1 AND column_name = $2
         )",
    )
    .bind(table)
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}
