//! # ChatRS UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! Terminal presentation for `chatrs chat`. Nothing in here changes chat
//! state; it only turns state into output.
//!
//! - **`typewriter`**: character-by-character output at a fixed rate.
//! - **`transcript`**: incremental rendering of a chat session, including the
//!   "Bot is typing..." indicator.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::common::ui::transcript::TranscriptRenderer;
//!
//! let mut renderer = TranscriptRenderer::new(Some(60));
//! renderer.render(&mut tokio::io::stdout(), &state).await?;
//! ```
//!
pub mod transcript;
pub mod typewriter;
