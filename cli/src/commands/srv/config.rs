//! # ChatRS HTTP Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! Builds the effective `ServerConfig` for `chatrs srv` from:
//! 1. Command-line arguments (highest priority)
//! 2. The `[server]` and `[bot]` sections of the loaded configuration
//! 3. Default values (lowest priority, already folded into 2)
//!
//! Every flag is optional so that "not given" is distinguishable from "given
//! with the default value"; only flags the user actually passed override the
//! configuration file.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let args = SrvArgs::parse();
//! let config = ServerConfig::from_args(&args, &app_config);
//! println!("Listening on: {}:{}", config.host, config.port);
//! ```
//!
use crate::core::config::Config;
use clap::Parser;
use std::net::IpAddr;
use std::time::Duration;

/// # Server Command Arguments (`SrvArgs`)
///
/// Command-line arguments accepted by `chatrs srv`.
#[derive(Parser, Debug, Default)]
pub struct SrvArgs {
    /// Port to listen on. If it is taken, the next free port is used.
    /// Defaults to `server.port` from the configuration (8000).
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Address to bind to. `0.0.0.0` accepts connections from other machines.
    /// Defaults to `server.host` from the configuration (127.0.0.1).
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Milliseconds the bot "thinks" before replying (overrides `bot.reply_delay_ms`).
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// # Effective Server Configuration (`ServerConfig`)
///
/// Final settings the server logic runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub enable_cors: bool,
    /// Greeting the served session starts with.
    pub greeting: String,
    pub reply_delay: Duration,
}

impl ServerConfig {
    /// Merges command-line arguments over the loaded configuration.
    pub fn from_args(args: &SrvArgs, config: &Config) -> Self {
        Self {
            port: args.port.unwrap_or(config.server.port),
            host: args.host.unwrap_or(config.server.host),
            enable_cors: config.server.enable_cors && !args.no_cors,
            greeting: config.bot.greeting.clone(),
            reply_delay: args
                .delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.bot.reply_delay()),
        }
    }
}
