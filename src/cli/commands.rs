//! CLI command implementations
//!
//! Both commands read configuration from the environment once, build a
//! lazily-connecting pool, and block on a fresh tokio runtime.

use super::args::Command;
use super::errors::{CliError, CliResult};
use crate::config::AppConfig;
use crate::db;
use crate::http_server::{HttpServer, HttpServerConfig};

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { port } => serve(port),
        Command::InitDb => init_db(),
    }
}

/// Run the HTTP server until interrupted.
pub fn serve(port_override: Option<u16>) -> CliResult<()> {
    let config = AppConfig::from_env();

    let http_config = match port_override {
        Some(port) => HttpServerConfig::with_port(port),
        None => config.http.clone(),
    };

    tracing::info!(
        host = %config.database.host,
        port = config.database.port,
        database = %config.database.name,
        "database connection parameters"
    );

    let pool = db::connect_lazy(&config.database).map_err(|e| CliError::Config(e.to_string()))?;
    let server = HttpServer::with_config(pool, http_config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Boot(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Create and seed the demo table, then exit.
pub fn init_db() -> CliResult<()> {
    let config = AppConfig::from_env();

    tracing::info!(
        host = %config.database.host,
        port = config.database.port,
        database = %config.database.name,
        user = %config.database.user,
        "initializing database"
    );

    let pool = db::connect_lazy(&config.database).map_err(|e| CliError::Config(e.to_string()))?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        db::init_schema(&pool)
            .await
            .map_err(|e| CliError::Database(e.to_string()))
    })?;

    Ok(())
}
