//! One-shot platform registrations performed at startup.
//!
//! Both registrations are best-effort: a failure is logged and the bot
//! keeps serving commands without the affected shortcut.

use teloxide::prelude::*;
use teloxide::types::{MenuButton, WebAppInfo};
use teloxide::utils::command::BotCommands;
use tracing::{error, info};

use crate::config::BotConfig;
use crate::router::MENU_BUTTON_LABEL;

use super::command_handler::Command;

/// Register the persistent chat menu button that opens the storefront
/// web app.
pub async fn set_menu_button(bot: &Bot, config: &BotConfig) {
    let menu_button = MenuButton::WebApp {
        text: MENU_BUTTON_LABEL.to_string(),
        web_app: WebAppInfo {
            url: config.web_app_url.clone(),
        },
    };

    match bot.set_chat_menu_button().menu_button(menu_button).await {
        Ok(_) => info!("Menu button registered"),
        Err(e) => error!(error = %e, "Failed to register menu button"),
    }
}

/// Publish the command list so clients can offer a command menu.
pub async fn set_command_list(bot: &Bot) {
    match bot.set_my_commands(Command::bot_commands()).await {
        Ok(_) => info!("Command list registered"),
        Err(e) => error!(error = %e, "Failed to register command list"),
    }
}
