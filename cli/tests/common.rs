//! # ChatRS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`ask.rs`, `chat.rs`, ...).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate; this
//! one is pulled in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// # Get ChatRS Command (`chatrs_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `chatrs` binary.
///
/// ## Panics
/// Panics if the `chatrs` binary cannot be found via `Command::cargo_bin`.
pub fn chatrs_cmd() -> Command {
    Command::cargo_bin("chatrs").expect("Failed to find chatrs binary for testing")
}

/// # Isolated ChatRS Command (`isolated_cmd`)
///
/// Like `chatrs_cmd`, but pointed at a temporary config file holding `toml` so
/// user and project config files on the test machine are never read.
///
/// The returned `TempDir` must outlive the command run.
pub fn isolated_cmd(toml: &str) -> (Command, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for config");
    let path = dir.path().join("chatrs.toml");
    fs::write(&path, toml).expect("Failed to write temp config");

    let mut cmd = chatrs_cmd();
    cmd.arg("--config").arg(&path).current_dir(dir.path());
    (cmd, dir)
}
