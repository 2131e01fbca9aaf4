//! Start command handler

use teloxide::{Bot, types::Message, prelude::*};
use tracing::info;
use crate::utils::errors::Result;

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message) -> Result<()> {
    if let Some(user) = msg.from.as_ref() {
        info!(user_id = user.id.0, "User started bot");
    }

    let text = "👋 Hi! I translate messages on demand.\n\n\
        React to any message with 🌍 or 🌎 and I will post a translation \
        into your preferred language. Set it with /setlang, for example \
        /setlang fr. See /help for details.";

    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}
