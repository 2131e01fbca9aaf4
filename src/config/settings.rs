//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub translation: TranslationConfig,
    pub storage: StorageConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Reaction emojis that trigger a translation
    pub trigger_emojis: Vec<String>,
}

/// Translation provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslationConfig {
    pub api_url: String,
    pub timeout_seconds: u64,
    /// Target language used when a user has no stored preference
    pub default_language: String,
}

/// Preference store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub preferences_path: String,
}

/// Recent-message cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    pub capacity: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("LINGOBUDDY").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::LingoBuddyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                trigger_emojis: vec!["🌍".to_string(), "🌎".to_string()],
            },
            translation: TranslationConfig {
                api_url: "https://translate.googleapis.com".to_string(),
                timeout_seconds: 10,
                default_language: "en".to_string(),
            },
            storage: StorageConfig {
                preferences_path: "preferences.json".to_string(),
            },
            cache: CacheConfig { capacity: 1024 },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
