//! CLI module for filmdb
//!
//! Provides command-line interface for:
//! - serve: Load the catalog and serve the HTTP API
//! - query: One-shot JSON query over stdin/stdout
//! - check: Validate config and catalog

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, check_with, query, query_with, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
