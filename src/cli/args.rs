//! CLI argument definitions using clap
//!
//! Commands:
//! - pgbridge serve [--port <port>]
//! - pgbridge init-db

use clap::{Parser, Subcommand};

/// pgbridge - a stateless HTTP/JSON gateway over PostgreSQL tables
#[derive(Parser, Debug)]
#[command(name = "pgbridge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Port to listen on (overrides the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create and seed the demo table (idempotent)
    InitDb,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
