//! Command handlers module
//!
//! Handlers for the bot commands: /start, /help, /setlang

pub mod help;
pub mod setlang;
pub mod start;

pub use help::handle_help;
pub use setlang::handle_setlang;
pub use start::handle_start;
