//! # ChatRS Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! This module defines the error types used throughout ChatRS. The chat core
//! itself has exactly one failure mode (an empty or whitespace-only message);
//! everything else here belongs to the outer surfaces (configuration loading,
//! the HTTP server).
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ChatrsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if greeting.trim().is_empty() {
//!     return Err(ChatrsError::Config("greeting must not be empty".into()))?;
//! }
//!
//! // Pattern matching on error types
//! match resolver.try_respond(input, &recent) {
//!     Ok(reply) => println!("{}", reply),
//!     Err(ChatrsError::EmptyMessage) => {} // silently ignored
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the ChatRS application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChatrsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Message is empty.")]
    EmptyMessage,

    #[error("No pending reply for submission {id}.")]
    UnknownSubmission { id: u64 },

    #[error("Server error: {0}")]
    Server(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = ChatrsError::Config("Missing setting 'greeting'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'greeting'"
        );

        assert_eq!(ChatrsError::EmptyMessage.to_string(), "Message is empty.");

        let unknown = ChatrsError::UnknownSubmission { id: 7 };
        assert_eq!(unknown.to_string(), "No pending reply for submission 7.");
    }

    #[test]
    fn test_error_downcasts_through_anyhow() {
        let err: anyhow::Error = ChatrsError::Server("bind failed".into()).into();
        assert_eq!(
            err.downcast_ref::<ChatrsError>(),
            Some(&ChatrsError::Server("bind failed".into()))
        );
    }
}
