//! # ChatRS Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ChatRS CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration once for all commands
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! chatrs --help
//!
//! # Chat in the terminal with debug logging
//! chatrs -vv chat
//!
//! # Use a specific configuration file
//! chatrs --config ~/bots/quick.toml srv
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load and validate configuration
//! 4. Route to appropriate command handler
//! 5. Format and display any errors that occur
//!
use chatrs::{commands, core::config};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "chatrs",
    about = "💬 ChatRS: a canned-reply chat bot for the terminal and the browser",
    long_about = "Chat with a simple keyword-driven bot in the terminal, ask it a single question,\n\
                  or serve it over HTTP with a small browser chat page.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Read configuration from this file instead of the user/project config files.
    #[arg(long, global = true, env = "CHATRS_CONFIG")]
    config: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    #[command(alias = "s")]
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match config::load_config(cli.config.as_deref()) {
        Ok(cfg) => match cli.command {
            Commands::Chat(args) => commands::chat::handle_chat(args, &cfg).await,
            Commands::Ask(args) => commands::ask::handle_ask(args, &cfg).await,
            Commands::Srv(args) => commands::srv::handle_srv(args, &cfg).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn chatrs_cmd() -> Command {
        Command::cargo_bin("chatrs").expect("Failed to find chatrs binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        chatrs_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        chatrs_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
