//! Preference store implementation
//!
//! This module handles persistence of per-user language preferences using a
//! flat JSON file, including loading, lookup with a default, and full-file
//! rewrite on every update.

use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use crate::utils::errors::Result;

/// File-backed store of per-user language preferences
///
/// The backing file holds a single JSON object mapping user id strings to
/// language codes. The whole mapping is loaded once at startup and rewritten
/// in full on every update; records are never deleted.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    prefs: RwLock<HashMap<String, String>>,
}

impl PreferenceStore {
    /// Load the preference store from the backing file
    ///
    /// A missing or malformed file yields an empty store; loading never fails.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let prefs = match tokio::fs::read_to_string(&path).await {
            Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                Ok(prefs) => {
                    info!(path = %path.display(), count = prefs.len(), "Preferences loaded");
                    prefs
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e,
                          "Preferences file is malformed, starting with an empty store");
                    HashMap::new()
                }
            },
            Err(e) => {
                debug!(path = %path.display(), error = %e,
                       "Preferences file not readable, starting with an empty store");
                HashMap::new()
            }
        };

        Self {
            path,
            prefs: RwLock::new(prefs),
        }
    }

    /// Get the preferred language for a user, or the default when unset
    pub async fn get(&self, user_id: i64, default: &str) -> String {
        let prefs = self.prefs.read().await;
        prefs
            .get(&user_id.to_string())
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Set the preferred language for a user and persist the full mapping
    ///
    /// The write lock is held across the file rewrite so concurrent updates
    /// are serialized and the file never observes a partial mapping.
    pub async fn set(&self, user_id: i64, language_code: &str) -> Result<()> {
        let mut prefs = self.prefs.write().await;
        prefs.insert(user_id.to_string(), language_code.to_string());

        let serialized = serde_json::to_string_pretty(&*prefs)?;
        tokio::fs::write(&self.path, serialized).await?;

        debug!(user_id = user_id, language_code = language_code, "Preference persisted");
        Ok(())
    }

    /// Number of stored preference records
    pub async fn len(&self) -> usize {
        self.prefs.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
