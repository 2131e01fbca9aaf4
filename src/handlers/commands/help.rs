//! Help command handler

use teloxide::{Bot, types::Message, prelude::*};
use crate::utils::errors::Result;

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    let help_text = "🤖 LingoBuddy Help\n\n\
        React to any message with 🌍 or 🌎 and I will translate it into \
        your preferred language.\n\n\
        /start - Start the bot\n\
        /help - Show this help message\n\
        /setlang <code> - Set your preferred language, e.g. /setlang fr\n\n\
        Without a stored preference, translations default to English.";

    bot.send_message(msg.chat.id, help_text).await?;
    Ok(())
}
