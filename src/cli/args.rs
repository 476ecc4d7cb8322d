//! CLI argument definitions using clap
//!
//! Commands:
//! - artfolio serve --config <path> [--port <port>]
//! - artfolio check-config --config <path>
//! - artfolio layout --width <px> --count <n>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// artfolio - A self-hostable personal art gallery
#[derive(Parser, Debug)]
#[command(name = "artfolio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log output format
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./artfolio.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a configuration file and exit
    CheckConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./artfolio.json")]
        config: PathBuf,
    },

    /// Print the column layout for a viewport width
    Layout {
        /// Viewport width in CSS pixels
        #[arg(long)]
        width: u32,

        /// Number of items to distribute
        #[arg(long, default_value_t = 0)]
        count: usize,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["artfolio", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("./artfolio.json"));
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_parse_layout() {
        let cli = Cli::try_parse_from([
            "artfolio",
            "--log-format",
            "json",
            "layout",
            "--width",
            "1024",
            "--count",
            "7",
        ])
        .unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Command::Layout { width: 1024, count: 7 }));
    }
}
