//! # ChatRS CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! Integration tests for `chatrs ask`, which prints the reply a fresh
//! session would give to one message.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_ask_identity() {
    let (mut cmd, _dir) = isolated_cmd("");
    cmd.args(["ask", "What", "is", "your", "name?"])
        .assert()
        .success()
        .stdout("I am your personal chatbot.\n");
}

#[test]
fn test_ask_is_case_insensitive() {
    let (mut cmd, _dir) = isolated_cmd("");
    cmd.args(["ask", "HELP ME WITH TASKS"])
        .assert()
        .success()
        .stdout("Sure! I can help you manage your tasks.\n");
}

#[test]
fn test_ask_first_match_wins() {
    let (mut cmd, _dir) = isolated_cmd("");
    cmd.args(["ask", "who are you, help me with tasks"])
        .assert()
        .success()
        .stdout("I am your personal chatbot.\n");
}

#[test]
fn test_ask_recent_messages_uses_configured_greeting() {
    let (mut cmd, _dir) = isolated_cmd("[bot]\ngreeting = \"Howdy!\"\n");
    cmd.args(["ask", "show recent messages"])
        .assert()
        .success()
        .stdout("Here are your recent messages:\nbot: Howdy!\n");
}

#[test]
fn test_ask_fallback() {
    let (mut cmd, _dir) = isolated_cmd("");
    cmd.args(["ask", "tell me a joke"])
        .assert()
        .success()
        .stdout("Hello How can I help you today?\n");
}

#[test]
fn test_ask_blank_prints_nothing() {
    let (mut cmd, _dir) = isolated_cmd("");
    cmd.args(["ask", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_ask_requires_text() {
    chatrs_cmd().arg("ask").assert().failure();
}
