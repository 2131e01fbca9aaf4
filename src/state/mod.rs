//! In-memory state module
//!
//! This module contains the bounded cache of recently seen messages

pub mod cache;

pub use cache::MessageCache;
