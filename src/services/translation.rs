//! Translation service implementation
//!
//! This service handles the call-through to the Google Translate web
//! endpoint, including HTTP client setup, response parsing, and error
//! handling. No retries; a failed request is reported to the caller once.

use std::time::Duration;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use crate::config::settings::Settings;
use crate::utils::errors::{LingoBuddyError, TranslationError, TranslationResult, Result};

/// Translation service backed by the Google Translate `gtx` endpoint
#[derive(Debug, Clone)]
pub struct TranslationService {
    client: Client,
    settings: Settings,
}

impl TranslationService {
    /// Create a new TranslationService instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.translation.timeout_seconds))
            .user_agent("LingoBuddy-Bot/1.0")
            .build()
            .map_err(LingoBuddyError::Http)?;

        Ok(Self { client, settings })
    }

    /// Translate `text` into `target_lang`, auto-detecting the source language
    pub async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        let url = format!("{}/translate_a/single", self.settings.translation.api_url);

        debug!(target_lang = target_lang, text_len = text.len(), "Making translation request");

        let response = self.client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LingoBuddyError::Translation(TranslationError::Timeout)
                } else if e.is_connect() {
                    LingoBuddyError::Translation(TranslationError::ServiceUnavailable)
                } else {
                    LingoBuddyError::Translation(TranslationError::RequestFailed(e.to_string()))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LingoBuddyError::Translation(TranslationError::RequestFailed(
                format!("HTTP {}: {}", status, error_text)
            )));
        }

        let payload: Value = response.json().await
            .map_err(|e| LingoBuddyError::Translation(TranslationError::InvalidResponse(e.to_string())))?;

        let translated = parse_translation_payload(&payload)
            .map_err(LingoBuddyError::Translation)?;

        debug!(target_lang = target_lang, translated_len = translated.len(), "Translation succeeded");
        Ok(translated)
    }
}

/// Extract the translated text from the provider payload
///
/// The endpoint answers with nested arrays; the translation is split into
/// segments at `payload[0][i][0]` which are concatenated here.
fn parse_translation_payload(payload: &Value) -> TranslationResult<String> {
    let segments = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::InvalidResponse(
            "missing translation segments".to_string()
        ))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(part);
        }
    }

    if translated.is_empty() {
        return Err(TranslationError::InvalidResponse(
            "empty translation".to_string()
        ));
    }

    Ok(translated)
}
