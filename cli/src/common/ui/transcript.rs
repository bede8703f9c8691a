//! # Terminal Transcript Renderer
//!
//! File: cli/src/common/ui/transcript.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! Turns successive `ChatState` values into terminal output. The renderer
//! remembers how many messages it has already shown; because the conversation
//! store is append-only, everything past that index is new.
//!
//! - Bot messages are printed as `Bot: <text>`, typed out when a speed is set.
//!   Continuation lines of multi-line replies are indented under the first.
//! - User messages are skipped: the terminal already echoed what was typed.
//! - `Bot is typing...` is printed once each time the session starts composing.
//!
use super::typewriter::type_out;
use crate::chat::{ChatState, Message, Sender};
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub const TYPING_INDICATOR: &str = "Bot is typing...";

const BOT_PREFIX: &str = "Bot: ";

/// Formats a message as a transcript line (without trailing newline).
pub fn format_message(message: &Message) -> String {
    let prefix = match message.sender() {
        Sender::Bot => BOT_PREFIX,
        Sender::User => "You: ",
    };
    let indent = " ".repeat(prefix.len());
    let mut lines = message.text().lines();
    let mut rendered = format!("{}{}", prefix, lines.next().unwrap_or_default());
    for line in lines {
        rendered.push('\n');
        rendered.push_str(&indent);
        rendered.push_str(line);
    }
    rendered
}

#[derive(Debug)]
pub struct TranscriptRenderer {
    shown: usize,
    indicator_visible: bool,
    chars_per_second: Option<u32>,
}

impl TranscriptRenderer {
    pub fn new(chars_per_second: Option<u32>) -> Self {
        Self {
            shown: 0,
            indicator_visible: false,
            chars_per_second,
        }
    }

    /// Prints whatever changed since the previous call.
    pub async fn render<W>(&mut self, out: &mut W, state: &ChatState) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let messages = state.messages();
        for message in messages.iter().skip(self.shown) {
            if message.sender() == Sender::Bot {
                type_out(out, &format_message(message), self.chars_per_second).await?;
                out.write_all(b"\n").await?;
            }
        }
        self.shown = messages.len();

        if state.is_composing() && !self.indicator_visible {
            out.write_all(format!("{}\n", TYPING_INDICATOR).as_bytes()).await?;
        }
        self.indicator_visible = state.is_composing();
        out.flush().await
    }

    /// Number of messages already handled.
    pub fn shown(&self) -> usize {
        self.shown
    }
}
