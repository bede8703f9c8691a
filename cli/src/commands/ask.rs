//! # ChatRS One-Shot Query (`chatrs ask`)
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! Prints the reply a fresh session would give to a single message, without
//! the simulated delay. Handy in scripts and for checking the canned replies.
//!
//! ```bash
//! chatrs ask who are you
//! chatrs ask "Show recent messages"
//! ```
//!
use crate::chat::resolver::RECENT_WINDOW;
use crate::chat::store::ConversationStore;
use crate::chat::ResponseResolver;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to send. Multiple words are joined with spaces.
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Resolves `text` against a session holding only the greeting.
/// Returns `None` for blank input.
fn reply_for(text: &str, greeting: &str) -> Option<String> {
    let store = ConversationStore::new(greeting);
    ResponseResolver
        .try_respond(text, store.recent(RECENT_WINDOW))
        .ok()
}

pub async fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    let text = args.text.join(" ");
    match reply_for(&text, &config.bot.greeting) {
        Some(reply) => println!("{}", reply),
        None => debug!("Nothing to send; ignoring blank message"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::resolver::{FALLBACK_REPLY, IDENTITY_REPLY};

    #[test]
    fn test_reply_for_known_phrase() {
        assert_eq!(
            reply_for("What is your name?", "Hi"),
            Some(IDENTITY_REPLY.to_string())
        );
    }

    #[test]
    fn test_reply_for_recent_lists_greeting() {
        assert_eq!(
            reply_for("show recent messages", "Hi"),
            Some("Here are your recent messages:\nbot: Hi".to_string())
        );
    }

    #[test]
    fn test_reply_for_blank_is_none() {
        assert_eq!(reply_for("  ", "Hi"), None);
        assert_eq!(reply_for("xyz", "Hi"), Some(FALLBACK_REPLY.to_string()));
    }
}
