//! # Turn Controller
//!
//! File: cli/src/chat/controller.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! The turn controller owns the chat state of one session and drives each
//! turn: it validates a submission, appends the user's message, resolves the
//! canned reply, and hands the delayed append of that reply to the
//! `ReplyTimer`.
//!
//! ## State
//!
//! State lives in a `tokio::sync::watch` channel. The sender is the single
//! owner of the `ChatState`; every mutation goes through `send_modify` /
//! `send_if_modified`, so presentation layers can either poll (`snapshot()`)
//! or subscribe (`subscribe()`) and get woken on every change.
//!
//! The session is **Idle** when no reply is pending and **AwaitingReply**
//! otherwise. Submissions are accepted in both states. Every accepted
//! submission schedules its own reply, so overlapping turns each get an
//! answer; the composing flag stays set until the last of them lands.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let controller = TurnController::new("Hello!", Duration::from_millis(1500));
//! let id = controller.submit("who are you").expect("non-empty text is accepted");
//! assert!(controller.is_composing());
//! controller.wait_idle().await;
//! ```
//!
use super::message::{Message, Sender};
use super::resolver::{ResponseResolver, RECENT_WINDOW};
use super::store::ConversationStore;
use super::timer::{ReplyTimer, SubmissionId};
use crate::core::error::ChatrsError;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

/// Mutable state of one chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    store: ConversationStore,
    pending_replies: usize,
}

impl ChatState {
    fn new(greeting: &str) -> Self {
        Self {
            store: ConversationStore::new(greeting),
            pending_replies: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    /// True while at least one bot reply is pending.
    pub fn is_composing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn snapshot(&self) -> ChatSnapshot {
        ChatSnapshot {
            messages: self.store.messages().to_vec(),
            composing: self.is_composing(),
        }
    }
}

/// Owned read model handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatSnapshot {
    pub messages: Vec<Message>,
    pub composing: bool,
}

pub struct TurnController {
    state: Arc<watch::Sender<ChatState>>,
    resolver: ResponseResolver,
    timer: ReplyTimer,
    reply_delay: Duration,
    next_id: AtomicU64,
}

impl TurnController {
    pub fn new(greeting: &str, reply_delay: Duration) -> Self {
        let (state, _) = watch::channel(ChatState::new(greeting));
        Self {
            state: Arc::new(state),
            resolver: ResponseResolver,
            timer: ReplyTimer::new(),
            reply_delay,
            next_id: AtomicU64::new(1),
        }
    }

    /// # Submit a Message (`submit`)
    ///
    /// Starts a turn for `text`.
    ///
    /// Empty or whitespace-only text is ignored: nothing is appended, the
    /// composing flag is untouched, and subscribers are not notified.
    ///
    /// Otherwise the recent history is captured *before* the user's message is
    /// appended (it feeds the recent-messages reply), the message is appended
    /// as typed, the composing flag is raised, and the reply is scheduled for
    /// `reply_delay` from now.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// ## Returns
    ///
    /// * `Some(id)` for an accepted submission; `id` can be passed to `cancel()`.
    /// * `None` for ignored input.
    pub fn submit(&self, text: &str) -> Option<SubmissionId> {
        let mut reply = None;
        self.state.send_if_modified(|state| {
            match self
                .resolver
                .try_respond(text, state.store.recent(RECENT_WINDOW))
            {
                Ok(resolved) => {
                    state.store.append(Sender::User, text);
                    state.pending_replies += 1;
                    reply = Some(resolved);
                    true
                }
                Err(e) => {
                    debug!("Ignoring submission: {}", e);
                    false
                }
            }
        });
        let reply = reply?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!("Accepted submission {}: {:?}", id, text);

        let state = Arc::clone(&self.state);
        self.timer.schedule(id, self.reply_delay, move || {
            state.send_modify(|state| {
                state.store.append(Sender::Bot, reply);
                state.pending_replies = state.pending_replies.saturating_sub(1);
            });
            debug!("Appended reply for submission {}", id);
        });
        Some(id)
    }

    /// Cancels the pending reply of submission `id`.
    ///
    /// The user's message stays in the history. Fails with
    /// `ChatrsError::UnknownSubmission` if the reply already landed, was
    /// already cancelled, or `id` was never issued.
    pub fn cancel(&self, id: SubmissionId) -> Result<(), ChatrsError> {
        if !self.timer.cancel(id) {
            return Err(ChatrsError::UnknownSubmission { id });
        }
        self.state.send_modify(|state| {
            state.pending_replies = state.pending_replies.saturating_sub(1);
        });
        Ok(())
    }

    pub fn snapshot(&self) -> ChatSnapshot {
        self.state.borrow().snapshot()
    }

    /// Owned copy of the current state.
    pub fn state(&self) -> ChatState {
        self.state.borrow().clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.borrow().messages().to_vec()
    }

    pub fn is_composing(&self) -> bool {
        self.state.borrow().is_composing()
    }

    /// Receiver that is notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<ChatState> {
        self.state.subscribe()
    }

    /// Resolves once no reply is pending.
    pub async fn wait_idle(&self) {
        let mut rx = self.state.subscribe();
        // The sender lives as long as `self`, so this cannot observe a closed channel.
        let _ = rx.wait_for(|state| !state.is_composing()).await;
    }
}

impl Drop for TurnController {
    fn drop(&mut self) {
        self.timer.cancel_all();
    }
}
