//! CLI-specific error types
//!
//! All CLI errors are fatal: main prints them and exits non-zero.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad or unusable configuration (e.g. an unparsable connection URL)
    #[error("configuration error: {0}")]
    Config(String),

    /// Runtime or server startup failure
    #[error("boot failed: {0}")]
    Boot(String),

    /// Database statement failure during init
    #[error("database error: {0}")]
    Database(String),
}
