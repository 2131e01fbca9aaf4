//! Error handling for LingoBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for LingoBuddy application
#[derive(Error, Debug)]
pub enum LingoBuddyError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Translation provider specific errors
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    RequestFailed(String),

    #[error("translation request timed out")]
    Timeout,

    #[error("invalid translation response: {0}")]
    InvalidResponse(String),

    #[error("translation service unavailable")]
    ServiceUnavailable,
}

/// Result type alias for LingoBuddy operations
pub type Result<T> = std::result::Result<T, LingoBuddyError>;

/// Result type alias for translation operations
pub type TranslationResult<T> = std::result::Result<T, TranslationError>;

impl LingoBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            LingoBuddyError::Telegram(_) => true,
            LingoBuddyError::Translation(_) => true,
            LingoBuddyError::Config(_) => false,
            LingoBuddyError::Http(_) => true,
            LingoBuddyError::Serialization(_) => false,
            LingoBuddyError::Io(_) => true,
            LingoBuddyError::InvalidInput(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors_are_recoverable() {
        assert!(LingoBuddyError::Translation(TranslationError::Timeout).is_recoverable());
        assert!(LingoBuddyError::Translation(TranslationError::ServiceUnavailable)
            .is_recoverable());
    }

    #[test]
    fn test_startup_and_input_errors_are_not_recoverable() {
        assert!(!LingoBuddyError::Config("missing token".to_string()).is_recoverable());
        assert!(!LingoBuddyError::InvalidInput("no user".to_string()).is_recoverable());
    }
}
