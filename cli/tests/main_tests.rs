//! # ChatRS CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! Top-level behavior of the `chatrs` binary: standard flags, subcommand
//! listing, and configuration errors.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    chatrs_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("chat")
                .and(predicate::str::contains("ask"))
                .and(predicate::str::contains("srv")),
        );
}

#[test]
fn test_version_flag() {
    chatrs_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    chatrs_cmd().assert().failure();
}

#[test]
fn test_invalid_config_is_reported() {
    let (mut cmd, _dir) = isolated_cmd("[bot]\nreply_delay_ms = 999999\n");
    cmd.args(["ask", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration validation failed"));
}

#[test]
fn test_unparsable_config_is_reported() {
    let (mut cmd, _dir) = isolated_cmd("[bot\n");
    cmd.args(["ask", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}

#[test]
fn test_missing_config_file_is_reported() {
    chatrs_cmd()
        .args(["--config", "/definitely/not/here/chatrs.toml", "ask", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read configuration file"));
}
