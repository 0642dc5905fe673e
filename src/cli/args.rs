//! CLI argument definitions using clap
//!
//! Commands:
//! - filmdb serve --config <path> [--port <port>]
//! - filmdb query --config <path>
//! - filmdb check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// filmdb - REST query service over a film catalog
#[derive(Parser, Debug)]
#[command(name = "filmdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the catalog and serve the HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./filmdb.json")]
        config: PathBuf,

        /// Override the configured HTTP port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run one JSON request from stdin and exit
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./filmdb.json")]
        config: PathBuf,
    },

    /// Validate the configuration and catalog, then exit
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./filmdb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
