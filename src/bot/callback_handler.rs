//! Callback Handler module for processing inline keyboard callback queries.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tracing::{debug, error};

// Import configuration
use crate::config::BotConfig;

// Import the router
use crate::router::{route, EventKey, RenderAction, RenderContext};

// Import UI builder functions
use super::ui_builder::{keyboard_markup, parse_mode};

/// Handle callback queries from inline keyboards.
///
/// A recognized payload renders its router entry against the originating
/// message and then acknowledges the query, which clears the loading
/// indicator on the pressed button. The acknowledgment runs even when
/// the render fails. An unknown payload gets neither a render nor an
/// acknowledgment.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, config: Arc<BotConfig>) -> Result<()> {
    let data = q.data.as_deref().unwrap_or("");
    debug!(user_id = %q.from.id, payload = data, "Received callback query");

    let ctx = RenderContext {
        first_name: &q.from.first_name,
        web_app_url: &config.web_app_url,
    };

    let Some(action) = route(EventKey::Callback(data), &ctx) else {
        debug!(user_id = %q.from.id, payload = data, "Unknown callback payload ignored");
        return Ok(());
    };

    if let Some(msg) = &q.message {
        let template = action.template();
        let mode = parse_mode(template);
        let markup = keyboard_markup(&template.keyboard);

        let result = match &action {
            RenderAction::EditInPlace(_) => {
                let mut request = bot.edit_message_text(msg.chat().id, msg.id(), template.text.clone());
                if let Some(mode) = mode {
                    request = request.parse_mode(mode);
                }
                if let Some(markup) = markup {
                    request = request.reply_markup(markup);
                }
                request.await.map(|_| ())
            }
            RenderAction::Send(_) => {
                let mut request = bot.send_message(msg.chat().id, template.text.clone());
                if let Some(mode) = mode {
                    request = request.parse_mode(mode);
                }
                if let Some(markup) = markup {
                    request = request.reply_markup(markup);
                }
                request.await.map(|_| ())
            }
        };

        if let Err(e) = result {
            error!(user_id = %q.from.id, payload = data, error = %e, "Failed to render callback transition");
        }
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;

    Ok(())
}
