//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{LingoBuddyError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_translation_config(&settings.translation)?;
    validate_storage_config(&settings.storage)?;
    validate_cache_config(&settings.cache)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(LingoBuddyError::Config(
            "Bot token is required".to_string()
        ));
    }

    if config.trigger_emojis.is_empty() {
        return Err(LingoBuddyError::Config(
            "At least one trigger emoji must be configured".to_string()
        ));
    }

    Ok(())
}

/// Validate translation provider configuration
fn validate_translation_config(config: &super::TranslationConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(LingoBuddyError::Config(
            "Translation API URL is required".to_string()
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(LingoBuddyError::Config(
            "Translation timeout must be greater than 0".to_string()
        ));
    }

    if config.default_language.is_empty() {
        return Err(LingoBuddyError::Config(
            "Default target language is required".to_string()
        ));
    }

    Ok(())
}

/// Validate preference store configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.preferences_path.is_empty() {
        return Err(LingoBuddyError::Config(
            "Preferences file path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate message cache configuration
fn validate_cache_config(config: &super::CacheConfig) -> Result<()> {
    if config.capacity == 0 {
        return Err(LingoBuddyError::Config(
            "Message cache capacity must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LingoBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LingoBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
