//! Command and callback router for the storefront front door.
//!
//! The router is the whole decision core of the bot: a fixed table that
//! maps event keys (slash commands and callback payloads, two separate
//! namespaces) to rendered message templates. It performs no I/O; the
//! handlers in [`crate::bot`] execute the returned [`RenderAction`]
//! against the Telegram API.

use url::Url;

/// Callback payload that switches the welcome message to the info view.
pub const CALLBACK_INFO: &str = "info";

/// Callback payload that switches the info view back to the welcome message.
pub const CALLBACK_BACK_TO_START: &str = "back_to_start";

/// Label of the persistent chat menu button that opens the web app.
pub const MENU_BUTTON_LABEL: &str = "🛍 Store";

/// How a template's text should be interpreted by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    Html,
}

/// What pressing a button does. A button has exactly one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Open the storefront web app at the configured URL.
    OpenWebApp(Url),
    /// Emit a callback query carrying this payload.
    Callback(&'static str),
}

/// A single inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: ButtonAction,
}

impl Button {
    fn web_app(label: &'static str, url: &Url) -> Self {
        Self {
            label,
            action: ButtonAction::OpenWebApp(url.clone()),
        }
    }

    fn callback(label: &'static str, payload: &'static str) -> Self {
        Self {
            label,
            action: ButtonAction::Callback(payload),
        }
    }
}

/// Fixed text plus inline keyboard rows, recomputed per event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pub text: String,
    pub format: TextFormat,
    /// Ordered button rows; empty means the message carries no keyboard.
    pub keyboard: Vec<Vec<Button>>,
}

/// Inbound event key, namespaced the way the platform delivers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKey<'a> {
    /// Slash command name without the leading slash, e.g. `start`.
    Command(&'a str),
    /// Callback payload from an inline button press.
    Callback(&'a str),
}

/// Per-event data the templates interpolate.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Display name of the requesting user.
    pub first_name: &'a str,
    /// Storefront web app URL for open-store buttons.
    pub web_app_url: &'a Url,
}

/// The decision [`route`] hands back to the platform adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderAction {
    /// Post the template as a new message.
    Send(MessageTemplate),
    /// Replace the originating message's text and keyboard.
    EditInPlace(MessageTemplate),
}

impl RenderAction {
    /// The template carried by either action kind.
    pub fn template(&self) -> &MessageTemplate {
        match self {
            RenderAction::Send(template) | RenderAction::EditInPlace(template) => template,
        }
    }
}

/// Map an event key to its render action.
///
/// Commands produce fresh sends; callbacks edit the message they came
/// from. The two UI states are Welcome and Info: `info` transitions
/// Welcome → Info, `back_to_start` transitions Info → Welcome, and the
/// same key always yields the same template for the same context.
///
/// A key outside the fixed table yields `None`; the bot stays silent
/// for those rather than surfacing an error.
pub fn route(key: EventKey<'_>, ctx: &RenderContext<'_>) -> Option<RenderAction> {
    match key {
        EventKey::Command("start") => Some(RenderAction::Send(welcome_template(ctx))),
        EventKey::Command("help") => Some(RenderAction::Send(help_template())),
        EventKey::Command("shop") => Some(RenderAction::Send(shop_template(ctx))),
        EventKey::Callback(CALLBACK_INFO) => Some(RenderAction::EditInPlace(info_template())),
        EventKey::Callback(CALLBACK_BACK_TO_START) => {
            Some(RenderAction::EditInPlace(welcome_template(ctx)))
        }
        _ => None,
    }
}

/// Welcome state: greeting plus the open-store and info buttons.
///
/// Rendered both for `/start` and for the `back_to_start` callback, so
/// the round trip through the info view restores the original message
/// byte for byte.
fn welcome_template(ctx: &RenderContext<'_>) -> MessageTemplate {
    let text = format!(
        "👋 Hi, {}!\n\n\
         🚀 Welcome to the storefront - digital goods with instant delivery!\n\n\
         🤖 AI subscriptions\n\
         🔐 VPN services\n\
         🎵 Music and video streaming\n\
         🎮 Games and in-game currency\n\
         💻 Software licenses\n\n\
         ✨ Instant delivery • Warranty • Best prices\n\n\
         Tap the button below to open the catalog 👇",
        ctx.first_name
    );

    MessageTemplate {
        text,
        format: TextFormat::Plain,
        keyboard: vec![vec![
            Button::web_app("🛍 Open store", ctx.web_app_url),
            Button::callback("ℹ️ Info", CALLBACK_INFO),
        ]],
    }
}

/// Help text: usage steps and the command list. No keyboard.
fn help_template() -> MessageTemplate {
    let text = "📱 <b>How to use the store:</b>\n\n\
                1️⃣ Tap the \"Open store\" button\n\
                2️⃣ Pick a product category\n\
                3️⃣ Browse the catalog\n\
                4️⃣ Proceed to checkout\n\n\
                <b>Bot commands:</b>\n\
                /start - Open the store\n\
                /help - Show this help\n\
                /shop - Quick access to the store\n"
        .to_string();

    MessageTemplate {
        text,
        format: TextFormat::Html,
        keyboard: Vec::new(),
    }
}

/// Quick-access prompt with a single open-store button.
fn shop_template(ctx: &RenderContext<'_>) -> MessageTemplate {
    MessageTemplate {
        text: "Tap the button below to open the store:".to_string(),
        format: TextFormat::Plain,
        keyboard: vec![vec![Button::web_app("🛍 Open store", ctx.web_app_url)]],
    }
}

/// Info state: support contacts, reachable from the welcome keyboard.
fn info_template() -> MessageTemplate {
    let text = "💡 <b>Help and contacts</b>\n\n\
                Questions about an order - message @storefront_support.\n\n\
                🔒 Payments are processed inside the web app; purchases are \
                delivered instantly after checkout."
        .to_string();

    MessageTemplate {
        text,
        format: TextFormat::Html,
        keyboard: vec![vec![Button::callback("◀️ Back", CALLBACK_BACK_TO_START)]],
    }
}
