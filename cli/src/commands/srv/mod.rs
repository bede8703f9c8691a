//! # ChatRS HTTP Chat Server
//!
//! File: cli/src/commands/srv/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! `chatrs srv` serves one chat session over HTTP: a small browser chat page
//! plus the JSON API it polls. Options cover:
//! - Port binding (with automatic fallback if the port is in use)
//! - Host interface binding
//! - CORS (Cross-Origin Resource Sharing)
//! - The simulated reply delay
//!
//! ## Architecture
//!
//! - `config.rs`: Command-line arguments and the effective `ServerConfig`
//! - `handlers.rs`: Axum handlers for the page and the API
//! - `server_logic.rs`: Router construction, port selection, serving, shutdown
//!
//! ## Examples
//!
//! ```bash
//! # Serve on the default port (8000)
//! chatrs srv
//!
//! # Reachable from other machines, faster bot
//! chatrs srv --host 0.0.0.0 --port 9000 --delay-ms 300
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use tracing::info;

pub use config::SrvArgs;

/// Command-line arguments and effective server configuration.
pub mod config;

/// Axum request handlers and shared application state.
pub mod handlers;

/// Router, port selection, and the serve loop.
pub mod server_logic;

/// # Handle Server Command (`handle_srv`)
///
/// Entry point for `chatrs srv`: merges the command-line arguments over the
/// loaded configuration and runs the server until it is shut down.
pub async fn handle_srv(args: SrvArgs, app_config: &Config) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let config = config::ServerConfig::from_args(&args, app_config);
    info!("Effective server config: {:?}", config);

    server_logic::run_server(config).await
}
