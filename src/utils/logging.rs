//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the LingoBuddy application.

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// Returns the file appender guard when file logging is enabled; the caller
/// must keep it alive for the lifetime of the process or buffered log lines
/// are lost on shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    let guard = match &config.file_path {
        Some(path) => {
            let file_appender = tracing_appender::rolling::daily(path, "lingobuddy.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log translation requests with structured data
pub fn log_translation_request(user_id: i64, target_lang: &str, text_len: usize) {
    info!(
        user_id = user_id,
        target_lang = target_lang,
        text_len = text_len,
        "Translation requested"
    );
}

/// Log preference updates
pub fn log_preference_update(user_id: i64, language_code: &str) {
    info!(
        user_id = user_id,
        language_code = language_code,
        "Language preference updated"
    );
}
