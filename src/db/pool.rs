//! Connection pool construction
//!
//! The pool is created lazily: the process boots even when the database is
//! down, and the first statement surfaces the failure as a 500.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::error::ApiResult;

/// Per-acquire timeout; also bounds how long a request waits on a dead
/// database before surfacing a 500.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_CONNECTIONS: u32 = 5;

/// Build a lazily-connecting pool from the configuration.
pub fn connect_lazy(config: &DatabaseConfig) -> ApiResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(&config.url())?;

    Ok(pool)
}
