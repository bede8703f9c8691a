//! # ChatRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the ChatRS CLI. Each
//! command defines its own arguments structure and an async handler that
//! receives the parsed arguments plus the loaded configuration.
//!
//! ## Commands
//!
//! - `chat`: Interactive chat session in the terminal
//! - `ask`: One-shot reply for a single message
//! - `srv`: HTTP chat server with an embedded browser page
//!

/// One-shot reply for a single message (`chatrs ask`).
pub mod ask;
/// Interactive terminal chat session (`chatrs chat`).
pub mod chat;
/// HTTP chat server. Includes configuration, handlers, and server logic.
pub mod srv;
