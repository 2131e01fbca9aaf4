//! LingoBuddy Telegram Bot
//!
//! A Telegram bot that translates messages on demand. Reacting to a message
//! with a trigger emoji (🌍 by default) posts a machine translation of its
//! text into the reactor's preferred language, persisted across sessions
//! with the /setlang command.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LingoBuddyError, Result};

// Re-export main components for easy access
pub use services::TranslationService;
pub use state::MessageCache;
pub use storage::PreferenceStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
