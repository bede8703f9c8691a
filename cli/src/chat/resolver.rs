//! # Response Resolver
//!
//! File: cli/src/chat/resolver.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! Maps a user utterance to exactly one canned reply. Matching is a
//! case-insensitive substring test on the trimmed utterance, checked in a fixed
//! order where the first hit wins:
//!
//! 1. `"what is your name"` or `"who are you"` → identity reply
//! 2. `"help me with tasks"` → tasks reply
//! 3. `"show recent messages"` → listing of the recent messages
//! 4. anything else → generic fallback
//!
//! The resolver holds no state. The only outside data it reads is the slice of
//! recent messages the caller passes in, so two calls with the same input and
//! the same slice always produce the same reply.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let resolver = ResponseResolver;
//! assert_eq!(resolver.respond("Who are you?", &[]), IDENTITY_REPLY);
//! assert!(resolver.try_respond("   ", &[]).is_err());
//! ```
//!
use super::message::Message;
use crate::core::error::ChatrsError;

pub const IDENTITY_REPLY: &str = "I am your personal chatbot.";
pub const TASKS_REPLY: &str = "Sure! I can help you manage your tasks.";
pub const RECENT_HEADER: &str = "Here are your recent messages:";
pub const FALLBACK_REPLY: &str = "Hello How can I help you today?";

/// How many messages the recent-messages reply lists.
pub const RECENT_WINDOW: usize = 3;

/// Pre-filled utterances offered as one-click shortcuts, one per matched intent.
pub const SUGGESTIONS: [&str; 3] = [
    "What is your name?",
    "Help me with tasks",
    "Show recent messages",
];

/// Which reply branch an utterance falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Identity,
    Tasks,
    RecentMessages,
    Fallback,
}

impl Intent {
    /// Classifies an already trimmed, lower-cased utterance.
    pub fn classify(normalized: &str) -> Self {
        if normalized.contains("what is your name") || normalized.contains("who are you") {
            Intent::Identity
        } else if normalized.contains("help me with tasks") {
            Intent::Tasks
        } else if normalized.contains("show recent messages") {
            Intent::RecentMessages
        } else {
            Intent::Fallback
        }
    }
}

/// Trims and lower-cases an utterance. Returns `None` when nothing is left.
///
/// A byte order mark counts as whitespace here, since `str::trim` keeps it.
pub fn normalize(input: &str) -> Option<String> {
    let trimmed = input.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Stateless canned-reply resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseResolver;

impl ResponseResolver {
    /// Returns the reply for `input`.
    ///
    /// `recent` should be the conversation tail taken before the user's new
    /// message was appended; only the recent-messages branch reads it, and
    /// at most the last `RECENT_WINDOW` entries are listed.
    ///
    /// Never fails: empty input falls through to the generic fallback.
    /// Callers that must reject empty input use `try_respond()`.
    pub fn respond(&self, input: &str, recent: &[Message]) -> String {
        let intent = normalize(input)
            .map(|normalized| Intent::classify(&normalized))
            .unwrap_or(Intent::Fallback);
        reply_for(intent, recent)
    }

    /// Fallible version of `respond()`.
    ///
    /// - Returns `Err(ChatrsError::EmptyMessage)` for empty or whitespace-only input.
    /// - Otherwise returns `Ok` with the reply.
    pub fn try_respond(&self, input: &str, recent: &[Message]) -> Result<String, ChatrsError> {
        let normalized = normalize(input).ok_or(ChatrsError::EmptyMessage)?;
        Ok(reply_for(Intent::classify(&normalized), recent))
    }
}

fn reply_for(intent: Intent, recent: &[Message]) -> String {
    match intent {
        Intent::Identity => IDENTITY_REPLY.into(),
        Intent::Tasks => TASKS_REPLY.into(),
        Intent::RecentMessages => format_recent(recent),
        Intent::Fallback => FALLBACK_REPLY.into(),
    }
}

fn format_recent(recent: &[Message]) -> String {
    let start = recent.len().saturating_sub(RECENT_WINDOW);
    let mut lines = Vec::with_capacity(RECENT_WINDOW + 1);
    lines.push(RECENT_HEADER.to_string());
    lines.extend(recent[start..].iter().map(Message::to_string));
    lines.join("\n")
}
