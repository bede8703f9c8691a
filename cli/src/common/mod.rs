//! # ChatRS Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! Shared helpers used by the command handlers but not part of the chat core.
//! Keeps presentation concerns out of `crate::chat` and away from the
//! individual commands.
//!
//! - **`ui`**: terminal rendering (typewriter output, transcript renderer).
//!

/// Terminal user interface helpers (typewriter, transcript rendering).
pub mod ui;
