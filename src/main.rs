//! LingoBuddy Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::types::{AllowedUpdate, MessageReactionUpdated};
use teloxide::update_listeners::Polling;
use teloxide::utils::command::BotCommands as TeloxideBotCommands;
use tracing::{info, warn, error};

use LingoBuddy::{
    config::Settings,
    utils::logging,
    services::TranslationService,
    state::MessageCache,
    storage::PreferenceStore,
    handlers::{
        commands::{help, setlang, start},
        messages::handle_message,
        reactions::handle_message_reaction,
    },
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file appender alive
    let _logging_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", LingoBuddy::info());

    // Load persisted language preferences
    info!("Loading language preferences...");
    let preferences = PreferenceStore::load(&settings.storage.preferences_path).await;

    // Initialize the recent-message cache
    let message_cache = MessageCache::new(settings.cache.capacity);

    // Initialize the translation service
    let translation_service = TranslationService::new(settings.clone())?;

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    info!("Setting up bot handlers...");

    // Wrap shared components in Arc for dependency injection
    let preferences_arc = Arc::new(preferences);
    let cache_arc = Arc::new(message_cache);
    let translator_arc = Arc::new(translation_service);
    let settings_arc = Arc::new(settings);

    // Create the handler
    let handler = create_handler();

    // Create dispatcher with dependencies registered
    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![
            preferences_arc,
            cache_arc,
            translator_arc,
            settings_arc
        ])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("LingoBuddy bot is ready!");

    // Reaction updates are not delivered unless requested explicitly
    let listener = Polling::builder(bot)
        .allowed_updates(vec![
            AllowedUpdate::Message,
            AllowedUpdate::EditedMessage,
            AllowedUpdate::MessageReaction,
        ])
        .build();

    dispatcher
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    info!("LingoBuddy bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry()
        .branch(Update::filter_message()
            .branch(
                // Handle commands
                dptree::entry()
                    .filter_command::<BotCommands>()
                    .endpoint(handle_commands)
            )
            .branch(
                // Cache regular messages for the reaction dispatcher
                dptree::endpoint(handle_messages)
            )
        )
        .branch(
            // Edited messages replace the cached text
            Update::filter_edited_message()
                .endpoint(handle_messages)
        )
        .branch(
            // Handle reactions added to messages
            Update::filter_message_reaction_updated()
                .endpoint(handle_reactions)
        )
}

#[derive(TeloxideBotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "LingoBuddy Bot Commands")]
enum BotCommands {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Set your preferred translation language")]
    Setlang(String),
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: BotCommands,
    preferences: Arc<PreferenceStore>,
) -> HandlerResult {
    let result = match cmd {
        BotCommands::Start => start::handle_start(bot, msg).await,
        BotCommands::Help => help::handle_help(bot, msg).await,
        BotCommands::Setlang(code) => {
            setlang::handle_setlang(bot, msg, code, preferences).await
        }
    };

    if let Err(e) = result {
        error!(error = %e, recoverable = e.is_recoverable(), "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(msg: Message, cache: Arc<MessageCache>) -> HandlerResult {
    if let Err(e) = handle_message(msg, cache).await {
        error!(error = %e, recoverable = e.is_recoverable(), "Error handling message");
        return Err(e.into());
    }

    Ok(())
}

/// Handle message reaction updates
async fn handle_reactions(
    bot: Bot,
    update: MessageReactionUpdated,
    cache: Arc<MessageCache>,
    preferences: Arc<PreferenceStore>,
    translator: Arc<TranslationService>,
    settings: Arc<Settings>,
) -> HandlerResult {
    if let Err(e) =
        handle_message_reaction(bot, update, cache, preferences, translator, settings).await
    {
        error!(error = %e, recoverable = e.is_recoverable(), "Error handling message reaction");
        return Err(e.into());
    }

    Ok(())
}
