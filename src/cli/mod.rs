//! CLI module for artfolio
//!
//! Provides command-line interface for:
//! - serve: Load config, wire services and run the HTTP server
//! - check-config: Validate a config file and exit
//! - layout: Print the column partition for a width and item count

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{build_state, check_config, layout, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliResult};
