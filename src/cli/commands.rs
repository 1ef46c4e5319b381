//! CLI command implementations
//!
//! `main.rs` stays logic-free: argument parsing, config loading, store
//! construction, and the runtime all live here.

use std::path::Path;

use clap::Parser;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::ProductStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

/// Start the HTTP server.
///
/// Configuration precedence, lowest to highest: built-in defaults, config
/// file, `PORT` env, `--port` flag. The store is seeded with the sample
/// catalog; there is no persistence across restarts.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = resolve_config(config_path, port)?;

    let store = ProductStore::seeded();
    let server = HttpServer::with_config(store, config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Resolve the effective configuration, lowest to highest precedence:
/// built-in defaults, config file, `PORT` env, `--port` flag.
fn resolve_config(config_path: Option<&Path>, port: Option<u16>) -> CliResult<HttpServerConfig> {
    let mut config = match config_path {
        Some(path) => HttpServerConfig::load(path)
            .map_err(|e| CliError::config_error(e.to_string()))?,
        None => HttpServerConfig::default(),
    };
    config.apply_env_overrides();
    if let Some(port) = port {
        config.port = port;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_serve_with_missing_config_file_fails() {
        let err = serve(Some(Path::new("/nonexistent/ssmart.json")), None).unwrap_err();
        assert!(err.to_string().contains("SSMART_CLI_CONFIG_ERROR"));
    }

    #[test]
    #[serial_test::serial]
    fn test_resolve_config_defaults() {
        let config = resolve_config(None, None).unwrap();
        assert_eq!(config.port, 10000);
    }

    #[test]
    #[serial_test::serial]
    fn test_port_flag_beats_env_and_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 3000}}"#).unwrap();

        std::env::set_var("PORT", "4567");
        let config = resolve_config(Some(file.path()), Some(9999)).unwrap();
        std::env::remove_var("PORT");

        assert_eq!(config.port, 9999);
    }
}
