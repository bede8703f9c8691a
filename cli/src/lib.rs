//! # ChatRS Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! Public library interface of the `chatrs` crate. The binary (`main.rs`) is a
//! thin argument-parsing shell over these modules, and integration tests in
//! `tests/` use them directly.
//!
//! - `chat`: conversation store, response resolver, reply timer, turn controller
//! - `commands`: handlers for `chat`, `ask`, and `srv`
//! - `common`: terminal presentation helpers
//! - `core`: configuration and error types
//!
pub mod chat;
pub mod commands;
pub mod common;
pub mod core;
