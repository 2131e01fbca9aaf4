//! Storage module
//!
//! This module contains the file-backed preference store

pub mod preferences;

pub use preferences::PreferenceStore;
