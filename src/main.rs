use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tracing::info;
use tracing_subscriber::EnvFilter;

use storefront_bot::bot::{self, Command};
use storefront_bot::config::BotConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Storefront Telegram Bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = Arc::new(BotConfig::from_env()?);

    info!(web_app_url = %config.web_app_url, "Configuration loaded");

    // Initialize the bot
    let bot = Bot::new(config.token.clone());

    // One-shot platform registrations; failures are logged, not fatal
    bot::set_menu_button(&bot, &config).await;
    bot::set_command_list(&bot).await;

    // Set up the dispatcher with the shared configuration
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint({
                    let config = Arc::clone(&config);
                    move |bot: Bot, msg: Message, cmd: Command| {
                        let config = Arc::clone(&config);
                        async move { bot::command_handler(bot, msg, cmd, config).await }
                    }
                }),
        )
        .branch(Update::filter_callback_query().endpoint({
            let config = Arc::clone(&config);
            move |bot: Bot, q: CallbackQuery| {
                let config = Arc::clone(&config);
                async move { bot::callback_handler(bot, q, config).await }
            }
        }));

    info!("Bot initialized, starting dispatcher");

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
