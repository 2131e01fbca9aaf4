//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Message handlers that feed the recent-message cache
//! - Reaction handlers that dispatch translations

pub mod commands;
pub mod messages;
pub mod reactions;

// Re-export commonly used handler functions
pub use messages::handle_message;
pub use reactions::handle_message_reaction;
