//! CLI argument definitions using clap
//!
//! Commands:
//! - ssmart serve [--config <path>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SS-Mart - a minimal, self-hostable product catalog REST API
#[derive(Parser, Debug)]
#[command(name = "ssmart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults used when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to bind (overrides config file and PORT env)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["ssmart", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert!(port.is_none());
            }
        }
    }

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["ssmart", "serve", "--port", "3000"]).unwrap();
        match cli.command {
            Command::Serve { port, .. } => assert_eq!(port, Some(3000)),
        }
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["ssmart"]).is_err());
    }
}
