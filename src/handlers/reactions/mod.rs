//! Reaction dispatcher module
//!
//! Handles message_reaction updates: a trigger emoji on a cached message
//! requests a translation into the reactor's preferred language and posts
//! the result back to the originating chat.

use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId, MessageReactionUpdated, ParseMode, ReactionType, User};
use tracing::{debug, error};

use crate::config::Settings;
use crate::services::TranslationService;
use crate::state::MessageCache;
use crate::storage::PreferenceStore;
use crate::utils::errors::Result;
use crate::utils::helpers::{escape_html, mention_user};
use crate::utils::logging;

/// An ephemeral translation request resolved from a reaction event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub target_lang: String,
}

/// Handle a message_reaction update
pub async fn handle_message_reaction(
    bot: Bot,
    update: MessageReactionUpdated,
    cache: Arc<MessageCache>,
    prefs: Arc<PreferenceStore>,
    translator: Arc<TranslationService>,
    settings: Arc<Settings>,
) -> Result<()> {
    // Anonymous reactions carry no user and cannot have a language preference
    let Some(user) = update.user().cloned() else {
        debug!(chat_id = update.chat.id.0, "Ignoring anonymous reaction");
        return Ok(());
    };

    let Some(request) = resolve_request(
        &user,
        update.chat.id,
        update.message_id,
        &update.old_reaction,
        &update.new_reaction,
        &cache,
        &prefs,
        &settings,
    )
    .await
    else {
        return Ok(());
    };

    let reactor_id = user.id.0 as i64;
    logging::log_translation_request(reactor_id, &request.target_lang, request.source_text.len());

    match translator.translate(&request.source_text, &request.target_lang).await {
        Ok(translated) => {
            let reply = format_translation_reply(&user, &request.target_lang, &translated);
            bot.send_message(update.chat.id, reply)
                .parse_mode(ParseMode::Html)
                .await?;
        }
        Err(e) => {
            error!(user_id = reactor_id, error = %e, "Translation failed");
            bot.send_message(update.chat.id, format!("❌ Translation failed: {}", e))
                .await?;
        }
    }

    Ok(())
}

/// Resolve a reaction event into a translation request, if it qualifies
///
/// Returns None when the reactor is a bot, when no trigger emoji was newly
/// added, or when the reacted message's text is not in the cache.
pub async fn resolve_request(
    reactor: &User,
    chat_id: ChatId,
    message_id: MessageId,
    old_reaction: &[ReactionType],
    new_reaction: &[ReactionType],
    cache: &MessageCache,
    prefs: &PreferenceStore,
    settings: &Settings,
) -> Option<TranslationRequest> {
    if reactor.is_bot {
        debug!(user_id = reactor.id.0, "Ignoring reaction from a bot account");
        return None;
    }

    if !added_trigger_reaction(old_reaction, new_reaction, &settings.bot.trigger_emojis) {
        return None;
    }

    let Some(source_text) = cache.get(chat_id, message_id).await else {
        debug!(
            chat_id = chat_id.0,
            message_id = message_id.0,
            "Reacted message has no cached text, skipping"
        );
        return None;
    };

    let target_lang = prefs
        .get(reactor.id.0 as i64, &settings.translation.default_language)
        .await;

    Some(TranslationRequest {
        source_text,
        target_lang,
    })
}

/// Check whether the update newly adds one of the trigger emojis
///
/// An emoji already present in the old reaction list does not re-trigger,
/// and custom emoji never trigger.
pub fn added_trigger_reaction(
    old_reaction: &[ReactionType],
    new_reaction: &[ReactionType],
    triggers: &[String],
) -> bool {
    let old_emojis: Vec<&str> = old_reaction.iter().filter_map(emoji_of).collect();

    new_reaction
        .iter()
        .filter_map(emoji_of)
        .any(|emoji| triggers.iter().any(|t| t == emoji) && !old_emojis.contains(&emoji))
}

fn emoji_of(reaction: &ReactionType) -> Option<&str> {
    match reaction {
        ReactionType::Emoji { emoji } => Some(emoji),
        _ => None,
    }
}

/// Format the in-chat reply for a successful translation
pub fn format_translation_reply(reactor: &User, target_lang: &str, translated: &str) -> String {
    format!(
        "{} 🌍 <b>Translation ({}):</b> {}",
        mention_user(reactor),
        target_lang.to_uppercase(),
        escape_html(translated)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::UserId;

    fn emoji(s: &str) -> ReactionType {
        ReactionType::Emoji {
            emoji: s.to_string(),
        }
    }

    fn triggers() -> Vec<String> {
        vec!["🌍".to_string(), "🌎".to_string()]
    }

    fn reactor() -> User {
        User {
            id: UserId(42),
            is_bot: false,
            first_name: "Alice".to_string(),
            last_name: None,
            username: None,
            language_code: None,
            is_premium: false,
            added_to_attachment_menu: false,
        }
    }

    #[test]
    fn test_trigger_emoji_added() {
        assert!(added_trigger_reaction(&[], &[emoji("🌍")], &triggers()));
        assert!(added_trigger_reaction(
            &[emoji("👍")],
            &[emoji("👍"), emoji("🌎")],
            &triggers()
        ));
    }

    #[test]
    fn test_non_trigger_emoji_ignored() {
        assert!(!added_trigger_reaction(&[], &[emoji("👍")], &triggers()));
        assert!(!added_trigger_reaction(&[], &[], &triggers()));
    }

    #[test]
    fn test_existing_trigger_does_not_retrigger() {
        assert!(!added_trigger_reaction(
            &[emoji("🌍")],
            &[emoji("🌍")],
            &triggers()
        ));
    }

    #[test]
    fn test_custom_emoji_never_triggers() {
        let custom = ReactionType::CustomEmoji {
            custom_emoji_id: "5368324170671202286".to_string(),
        };
        assert!(!added_trigger_reaction(&[], &[custom], &triggers()));
    }

    #[test]
    fn test_reply_contains_translation_and_mention() {
        let reply = format_translation_reply(&reactor(), "fr", "bonjour");
        assert!(reply.contains("bonjour"));
        assert!(reply.contains("Translation (FR):"));
        assert!(reply.contains("tg://user?id=42"));
        assert!(reply.contains("Alice"));
    }

    #[test]
    fn test_reply_escapes_translated_html() {
        let reply = format_translation_reply(&reactor(), "en", "<b>bold</b>");
        assert!(reply.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[tokio::test]
    async fn test_resolve_request_skips_bot_reactor() {
        let cache = MessageCache::new(8);
        cache.insert(ChatId(1), MessageId(1), "hello".to_string()).await;
        let dir = tempfile::tempdir().unwrap();
        let prefs = PreferenceStore::load(dir.path().join("preferences.json")).await;
        let settings = Settings::default();

        let mut bot_user = reactor();
        bot_user.is_bot = true;

        let request = resolve_request(
            &bot_user,
            ChatId(1),
            MessageId(1),
            &[],
            &[emoji("🌍")],
            &cache,
            &prefs,
            &settings,
        )
        .await;
        assert!(request.is_none());
    }

    #[tokio::test]
    async fn test_resolve_request_skips_uncached_message() {
        let cache = MessageCache::new(8);
        let dir = tempfile::tempdir().unwrap();
        let prefs = PreferenceStore::load(dir.path().join("preferences.json")).await;
        let settings = Settings::default();

        let request = resolve_request(
            &reactor(),
            ChatId(1),
            MessageId(1),
            &[],
            &[emoji("🌍")],
            &cache,
            &prefs,
            &settings,
        )
        .await;
        assert!(request.is_none());
    }
}
