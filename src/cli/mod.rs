//! CLI module for pgbridge
//!
//! Provides command-line interface for:
//! - serve: run the HTTP server
//! - init-db: create and seed the demo table

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init_db, run_command, serve};
pub use errors::{CliError, CliResult};

use tracing_subscriber::EnvFilter;

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    // .env is optional; missing files are not an error.
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse_args();
    commands::run_command(cli.command)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
