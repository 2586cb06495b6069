//! Demo schema initialization
//!
//! Creates and seeds the demo `your_table` idempotently: the table is only
//! created when absent and the seed insert skips on conflict, so repeated
//! runs are safe.

use sqlx::PgPool;

use crate::error::ApiResult;

const CREATE_DEMO_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS your_table (
        id SERIAL PRIMARY KEY,
        field1 VARCHAR(255) NOT NULL,
        field2 VARCHAR(255) NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )";

const SEED_DEMO_TABLE: &str = "
    INSERT INTO your_table (field1, field2)
    VALUES
        ('Example 1', 'Description 1'),
        ('Example 2', 'Description 2'),
        ('Example 3', 'Description 3')
    ON CONFLICT DO NOTHING";

/// Create and seed the demo table.
pub async fn init_schema(pool: &PgPool) -> ApiResult<()> {
    sqlx::query(CREATE_DEMO_TABLE).execute(pool).await?;
    sqlx::query(SEED_DEMO_TABLE).execute(pool).await?;

    tracing::info!("database initialized");
    Ok(())
}
