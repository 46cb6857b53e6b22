//! UI Builder module for turning router keyboards into Telegram markup.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode, WebAppInfo};

// Import the router types
use crate::router::{Button, ButtonAction, MessageTemplate, TextFormat};

/// Build Telegram reply markup for a template keyboard.
///
/// Returns `None` for an empty keyboard so callers can skip the
/// `reply_markup` call entirely instead of attaching an empty markup.
pub fn keyboard_markup(keyboard: &[Vec<Button>]) -> Option<InlineKeyboardMarkup> {
    if keyboard.is_empty() {
        return None;
    }

    let rows = keyboard
        .iter()
        .map(|row| row.iter().map(button_markup).collect::<Vec<_>>());

    Some(InlineKeyboardMarkup::new(rows))
}

fn button_markup(button: &Button) -> InlineKeyboardButton {
    match &button.action {
        ButtonAction::OpenWebApp(url) => {
            InlineKeyboardButton::web_app(button.label, WebAppInfo { url: url.clone() })
        }
        ButtonAction::Callback(payload) => InlineKeyboardButton::callback(button.label, *payload),
    }
}

/// Telegram parse mode for a template, if it needs one.
pub fn parse_mode(template: &MessageTemplate) -> Option<ParseMode> {
    match template.format {
        TextFormat::Plain => None,
        TextFormat::Html => Some(ParseMode::Html),
    }
}
