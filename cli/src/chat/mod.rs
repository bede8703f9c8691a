//! # ChatRS Chat Core
//!
//! File: cli/src/chat/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! Everything the bot "knows" lives here. The terminal and HTTP surfaces in
//! `crate::commands` are thin presentation layers over these types.
//!
//! ## Architecture
//!
//! - `message`: `Sender` and the immutable `Message`
//! - `store`: the append-only `ConversationStore`
//! - `resolver`: the canned-reply `ResponseResolver` and its fixed strings
//! - `timer`: `ReplyTimer`, cancellable delayed callbacks keyed by submission id
//! - `controller`: `TurnController`, which owns the session state and runs turns
//!
//! ## Turn flow
//!
//! 1. `TurnController::submit` rejects blank text without touching state.
//! 2. The recent history is captured, the user message is appended, and the
//!    composing flag goes up.
//! 3. The reply is resolved immediately but appended by the timer after the
//!    configured delay, which also lowers the composing flag.
//!
pub mod controller;
pub mod message;
pub mod resolver;
pub mod store;
pub mod timer;

pub use controller::{ChatSnapshot, ChatState, TurnController};
pub use message::{Message, Sender};
pub use resolver::{ResponseResolver, SUGGESTIONS};
pub use timer::SubmissionId;
