//! Command handler module for processing slash-command messages.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info};

// Import configuration
use crate::config::BotConfig;

// Import the router
use crate::router::{route, EventKey, RenderAction, RenderContext};

// Import UI builder functions
use super::ui_builder::{keyboard_markup, parse_mode};

/// Greeting name used when a message has no sender, e.g. a channel post.
const FALLBACK_FIRST_NAME: &str = "there";

/// Commands the storefront bot answers.
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "open the store")]
    Start,
    #[command(description = "show usage help")]
    Help,
    #[command(description = "quick access to the store")]
    Shop,
}

impl Command {
    /// Router event key for this command.
    pub fn key(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Shop => "shop",
        }
    }
}

/// Handle a slash command by sending the template the router picked.
pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    config: Arc<BotConfig>,
) -> Result<()> {
    debug!(chat_id = %msg.chat.id, command = cmd.key(), "Received command");

    let first_name = msg
        .from
        .as_ref()
        .map(|user| user.first_name.as_str())
        .unwrap_or(FALLBACK_FIRST_NAME);

    let ctx = RenderContext {
        first_name,
        web_app_url: &config.web_app_url,
    };

    match route(EventKey::Command(cmd.key()), &ctx) {
        Some(RenderAction::Send(template)) => {
            let mode = parse_mode(&template);
            let markup = keyboard_markup(&template.keyboard);

            let mut request = bot.send_message(msg.chat.id, template.text);
            if let Some(mode) = mode {
                request = request.parse_mode(mode);
            }
            if let Some(markup) = markup {
                request = request.reply_markup(markup);
            }
            request.await?;

            info!(chat_id = %msg.chat.id, command = cmd.key(), "Command handled");
        }
        Some(RenderAction::EditInPlace(_)) => {
            // Commands have no originating message to edit; the dispatch
            // table never produces this arm for the command namespace.
        }
        None => {
            debug!(command = cmd.key(), "Unrecognized command key ignored");
        }
    }

    Ok(())
}
