//! # ChatRS Interactive Chat (`chatrs chat`)
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! Runs one chat session in the terminal. Lines read from stdin are submitted
//! to a `TurnController`; state changes are rendered as they arrive, so the
//! prompt stays responsive while a reply is pending.
//!
//! ## Input
//!
//! - `/1`, `/2`, `/3` submit the suggestion shortcuts
//! - `/help` lists the shortcuts
//! - `/quit` (or end of input) leaves once pending replies have landed
//! - anything else is sent as typed; blank lines are ignored
//!
//! ## Examples
//!
//! ```bash
//! chatrs chat
//! chatrs chat --delay-ms 0 --no-typewriter
//! echo "who are you" | chatrs chat --no-typewriter
//! ```
//!
use crate::chat::{Message, TurnController, SUGGESTIONS};
use crate::common::ui::transcript::{format_message, TranscriptRenderer};
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Milliseconds the bot "thinks" before replying (overrides `bot.reply_delay_ms`).
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Print replies at once instead of typing them out.
    #[arg(long)]
    pub no_typewriter: bool,
}

/// What one line of input asks for.
#[derive(Debug, PartialEq, Eq)]
enum InputLine {
    Submit { text: String, shortcut: bool },
    Help,
    Quit,
}

fn parse_input(line: &str) -> InputLine {
    match line.trim() {
        "/quit" | "/exit" => InputLine::Quit,
        "/help" => InputLine::Help,
        command => {
            let shortcut = command
                .strip_prefix('/')
                .and_then(|n| n.parse::<usize>().ok())
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| SUGGESTIONS.get(index));
            match shortcut {
                Some(text) => InputLine::Submit {
                    text: (*text).to_string(),
                    shortcut: true,
                },
                None => InputLine::Submit {
                    text: line.to_string(),
                    shortcut: false,
                },
            }
        }
    }
}

fn help_text() -> String {
    let mut help = String::from("Shortcuts:\n");
    for (index, suggestion) in SUGGESTIONS.iter().enumerate() {
        help.push_str(&format!("  /{}  {}\n", index + 1, suggestion));
    }
    help.push_str("  /help  show this list\n  /quit  leave the chat\n");
    help
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(format!("{}\n", text).as_bytes())
        .await
        .context("Failed to write to stdout")?;
    out.flush().await.context("Failed to flush stdout")?;
    Ok(())
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs the interactive session until `/quit` or end of input, then waits for
/// any pending replies so none are lost when input is piped in.
pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.bot.reply_delay());
    let typewriter = (config.display.typewriter && !args.no_typewriter)
        .then_some(config.display.chars_per_second);
    info!(
        "Starting chat session (reply delay {:?}, typewriter {:?})",
        delay, typewriter
    );

    let controller = TurnController::new(&config.bot.greeting, delay);
    let mut updates = controller.subscribe();
    let mut renderer = TranscriptRenderer::new(typewriter);
    let mut out = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    write_line(&mut out, "💬 ChatRS: type /help for shortcuts, /quit to leave.").await?;
    let state = updates.borrow_and_update().clone();
    renderer.render(&mut out, &state).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    debug!("End of input");
                    break;
                };
                match parse_input(&line) {
                    InputLine::Quit => break,
                    InputLine::Help => write_line(&mut out, &help_text()).await?,
                    InputLine::Submit { text, shortcut } => {
                        if shortcut {
                            write_line(&mut out, &format_message(&Message::user(text.as_str()))).await?;
                        }
                        controller.submit(&text);
                    }
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                renderer.render(&mut out, &state).await?;
            }
        }
    }

    // Let pending replies land before leaving.
    let idle = controller.wait_idle();
    tokio::pin!(idle);
    loop {
        let state = updates.borrow_and_update().clone();
        renderer.render(&mut out, &state).await?;
        tokio::select! {
            _ = &mut idle => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }
    let state = updates.borrow_and_update().clone();
    renderer.render(&mut out, &state).await?;

    info!("Chat session ended after {} messages", renderer.shown());
    Ok(())
}
