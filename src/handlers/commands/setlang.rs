//! Setlang command handler
//!
//! Handles the /setlang command that stores a user's preferred target
//! language in the preference store.

use std::sync::Arc;
use teloxide::{Bot, types::{Message, ParseMode}, prelude::*};
use tracing::debug;
use crate::storage::PreferenceStore;
use crate::utils::errors::{LingoBuddyError, Result};
use crate::utils::helpers::{mention_user, normalize_lang_code};
use crate::utils::logging;

/// Handle /setlang command
pub async fn handle_setlang(
    bot: Bot,
    msg: Message,
    code: String,
    prefs: Arc<PreferenceStore>,
) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        LingoBuddyError::InvalidInput("No user in message".to_string())
    })?;

    let user_id = user.id.0 as i64;
    debug!(user_id = user_id, code = %code, "Processing /setlang command");

    let Some(language_code) = normalize_lang_code(&code) else {
        bot.send_message(
            msg.chat.id,
            "Usage: /setlang <language code>, e.g. /setlang fr",
        )
        .await?;
        return Ok(());
    };

    prefs.set(user_id, &language_code).await?;
    logging::log_preference_update(user_id, &language_code);

    let confirmation = format!(
        "✅ {}, your preferred language is now set to <code>{}</code>.",
        mention_user(user),
        language_code
    );
    bot.send_message(msg.chat.id, confirmation)
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}
