//! Services module
//!
//! This module contains external service integrations

pub mod translation;

pub use translation::TranslationService;
