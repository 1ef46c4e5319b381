//! CLI module for the SS-Mart API
//!
//! Provides the command-line interface:
//! - serve: boot the seeded store and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliResult};
