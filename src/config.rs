//! Environment-backed configuration for the bot process.

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Process-wide immutable configuration, loaded once at startup and
/// passed explicitly to the handlers.
///
/// The bot token carries no embedded default; it must be supplied
/// through the environment.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram Bot API token.
    pub token: String,
    /// Storefront web app URL injected into every open-store button and
    /// the chat menu button.
    pub web_app_url: Url,
}

impl BotConfig {
    /// Read configuration from `TELEGRAM_BOT_TOKEN` and `WEB_APP_URL`.
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN must be set")?;
        let web_app_url = env::var("WEB_APP_URL").context("WEB_APP_URL must be set")?;
        let web_app_url = Url::parse(&web_app_url)
            .with_context(|| format!("WEB_APP_URL is not a valid URL: {web_app_url}"))?;

        Ok(Self { token, web_app_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Env vars are process-global, so every scenario runs inside one
    /// test to keep them from racing each other.
    #[test]
    fn test_from_env_requires_token_and_valid_url() {
        env::remove_var("TELEGRAM_BOT_TOKEN");
        env::remove_var("WEB_APP_URL");
        assert!(BotConfig::from_env().is_err());

        env::set_var("TELEGRAM_BOT_TOKEN", "123456:test-token");
        assert!(BotConfig::from_env().is_err());

        env::set_var("WEB_APP_URL", "not a url");
        assert!(BotConfig::from_env().is_err());

        env::set_var("WEB_APP_URL", "https://store.example.com/");
        let config = BotConfig::from_env().unwrap();
        assert_eq!(config.token, "123456:test-token");
        assert_eq!(config.web_app_url.as_str(), "https://store.example.com/");
    }
}
