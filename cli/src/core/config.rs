//! # ChatRS Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! This module implements the configuration system for ChatRS, handling loading,
//! merging, validation, and access to configuration data. Settings shape the
//! outer behavior of the bot (greeting, reply delay, typewriter speed, server
//! binding); the canned replies themselves are fixed and not configurable.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config <PATH>` (replaces 2 and 3)
//! 2. Project-specific `.chatrs.toml` in current directory or ancestors
//! 3. User-specific config file (e.g. `~/.config/chatrs/config.toml` on Linux)
//! 4. Default values defined in the code
//!
//! Command-line flags are applied on top of the loaded configuration by the
//! individual command handlers.
//!
//! ## Examples
//!
//! ```toml
//! [bot]
//! greeting = "Hi there!"
//! reply_delay_ms = 500
//!
//! [display]
//! typewriter = false
//!
//! [server]
//! port = 9000
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! let delay = cfg.bot.reply_delay();
//! ```
//!
use crate::core::error::{ChatrsError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Greeting the conversation is seeded with.
pub const DEFAULT_GREETING: &str = "Hello! How can I help you today?";

/// Upper bound accepted for `bot.reply_delay_ms`.
const MAX_REPLY_DELAY_MS: u64 = 60_000;

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub server: ServerSection,
}

/// Settings for the simulated bot.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// First bot message of every session.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Simulated latency between a user message and the bot reply.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

/// Terminal rendering settings (`chatrs chat`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Type bot replies out character by character.
    #[serde(default = "default_typewriter")]
    pub typewriter: bool,
    /// Typewriter speed.
    #[serde(default = "default_chars_per_second")]
    pub chars_per_second: u32,
}

/// Defaults for the HTTP chat server (`chatrs srv`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}
fn default_reply_delay_ms() -> u64 {
    1500
}
fn default_typewriter() -> bool {
    true
}
fn default_chars_per_second() -> u32 {
    60
}
fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}
fn default_port() -> u16 {
    8000
}
fn default_enable_cors() -> bool {
    true
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            typewriter: default_typewriter(),
            chars_per_second: default_chars_per_second(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
        }
    }
}

impl BotConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".chatrs.toml";

/// # Load Configuration (`load_config`)
///
/// Loads, merges, and validates the effective configuration.
///
/// ## Arguments
///
/// * `explicit_path`: Value of the global `--config` flag. When present, only that
///   file is read (after `~` expansion) and it must exist.
///
/// ## Returns
///
/// * `Result<Config>`: The validated configuration, or an error if a file could not
///   be read/parsed or a value failed validation.
pub fn load_config(explicit_path: Option<&str>) -> Result<Config> {
    let config = match explicit_path {
        Some(raw) => {
            let path = PathBuf::from(shellexpand::tilde(raw).into_owned());
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ChatRS", "chatrs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_from(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.chatrs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.chatrs.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_from(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = user;

    if project_cfg.bot.greeting != defaults.bot.greeting {
        merged.bot.greeting = project_cfg.bot.greeting;
    }
    if project_cfg.bot.reply_delay_ms != defaults.bot.reply_delay_ms {
        merged.bot.reply_delay_ms = project_cfg.bot.reply_delay_ms;
    }
    if project_cfg.display.typewriter != defaults.display.typewriter {
        merged.display.typewriter = project_cfg.display.typewriter;
    }
    if project_cfg.display.chars_per_second != defaults.display.chars_per_second {
        merged.display.chars_per_second = project_cfg.display.chars_per_second;
    }
    if project_cfg.server.host != defaults.server.host {
        merged.server.host = project_cfg.server.host;
    }
    if project_cfg.server.port != defaults.server.port {
        merged.server.port = project_cfg.server.port;
    }
    if project_cfg.server.enable_cors != defaults.server.enable_cors {
        merged.server.enable_cors = project_cfg.server.enable_cors;
    }
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.bot.greeting.trim().is_empty() {
        return Err(anyhow!(ChatrsError::Config(
            "bot.greeting must not be empty.".to_string()
        )));
    }
    if config.bot.reply_delay_ms > MAX_REPLY_DELAY_MS {
        return Err(anyhow!(ChatrsError::Config(format!(
            "bot.reply_delay_ms is {} but may be at most {}.",
            config.bot.reply_delay_ms, MAX_REPLY_DELAY_MS
        ))));
    }
    if config.display.chars_per_second == 0 {
        return Err(anyhow!(ChatrsError::Config(
            "display.chars_per_second must be greater than zero.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
