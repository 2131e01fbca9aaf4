//! Utility modules
//!
//! Common utilities for error handling, logging, and helpers

pub mod errors;
pub mod helpers;
pub mod logging;

pub use errors::{LingoBuddyError, Result};
