//! # Conversation Store
//!
//! File: cli/src/chat/store.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! The conversation store is the ordered history of one chat session.
//! Insertion order is display order is chronological order. The store is
//! append-only: there are no edit, delete, or reorder operations, so any index
//! a reader has seen stays valid for the rest of the session.
//!
//! The store is seeded with a single bot greeting and lives only in memory.
//!
use super::message::{Message, Sender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationStore {
    messages: Vec<Message>,
}

impl ConversationStore {
    /// Creates a store holding one bot message with the given greeting.
    pub fn new(greeting: &str) -> Self {
        Self {
            messages: vec![Message::bot(greeting)],
        }
    }

    /// Appends a message to the end of the history.
    pub fn append(&mut self, sender: Sender, text: impl Into<String>) {
        self.messages.push(Message::new(sender, text));
    }

    /// Returns the last `n` messages in chronological order.
    /// Shorter histories return everything they have.
    pub fn recent(&self, n: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_seeded_with_greeting() {
        let store = ConversationStore::new("Hello!");
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert_eq!(store.messages()[0], Message::bot("Hello!"));
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = ConversationStore::new("Hello!");
        store.append(Sender::User, "one");
        store.append(Sender::Bot, "two");
        store.append(Sender::User, "three");

        let texts: Vec<&str> = store.messages().iter().map(Message::text).collect();
        assert_eq!(texts, vec!["Hello!", "one", "two", "three"]);
    }

    #[test]
    fn test_recent_returns_tail_in_order() {
        let mut store = ConversationStore::new("Hello!");
        store.append(Sender::User, "a");
        store.append(Sender::Bot, "b");
        store.append(Sender::User, "c");

        assert_eq!(
            store.recent(3),
            &[Message::user("a"), Message::bot("b"), Message::user("c")]
        );
    }

    #[test]
    fn test_recent_with_short_history() {
        let mut store = ConversationStore::new("Hello!");
        store.append(Sender::User, "a");

        assert_eq!(store.recent(3).len(), 2);
        assert_eq!(store.recent(0).len(), 0);
    }
}
