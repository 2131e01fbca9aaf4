//! Message handlers module
//!
//! Records the text of incoming messages so the reaction handler can find
//! it later; Telegram reaction updates do not include the message body.

use std::sync::Arc;
use teloxide::types::Message;
use tracing::trace;
use crate::state::MessageCache;
use crate::utils::errors::Result;

/// Handle incoming and edited text messages by caching their text
pub async fn handle_message(msg: Message, cache: Arc<MessageCache>) -> Result<()> {
    let from_is_bot = msg.from.as_ref().map_or(true, |user| user.is_bot);
    let text = msg.text();

    if !is_translatable(from_is_bot, text) {
        return Ok(());
    }

    trace!(chat_id = msg.chat.id.0, message_id = msg.id.0, "Caching message text");
    cache
        .insert(msg.chat.id, msg.id, text.unwrap_or_default().to_string())
        .await;

    Ok(())
}

/// Whether a message qualifies for translation
///
/// Bot-authored messages and command messages are not translatable and are
/// never cached, so a trigger reaction on them is skipped silently. Messages
/// without text (media, service messages) have nothing to translate.
pub fn is_translatable(from_is_bot: bool, text: Option<&str>) -> bool {
    if from_is_bot {
        return false;
    }

    match text {
        Some(text) => !text.starts_with('/') && !text.trim().is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_message_is_translatable() {
        assert!(is_translatable(false, Some("hello")));
    }

    #[test]
    fn test_bot_authored_message_is_not_translatable() {
        assert!(!is_translatable(true, Some("hello")));
    }

    #[test]
    fn test_command_message_is_not_translatable() {
        assert!(!is_translatable(false, Some("/setlang fr")));
        assert!(!is_translatable(false, Some("/help")));
    }

    #[test]
    fn test_blank_or_missing_text_is_not_translatable() {
        assert!(!is_translatable(false, Some("")));
        assert!(!is_translatable(false, Some("   ")));
        assert!(!is_translatable(false, None));
    }
}
