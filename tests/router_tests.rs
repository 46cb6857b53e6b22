use storefront_bot::router::{
    route, ButtonAction, EventKey, RenderAction, RenderContext, TextFormat, CALLBACK_BACK_TO_START,
    CALLBACK_INFO,
};
use url::Url;

#[cfg(test)]
mod tests {
    use super::*;

    /// Every event key the dispatch table defines.
    const ALL_KEYS: [EventKey<'static>; 5] = [
        EventKey::Command("start"),
        EventKey::Command("help"),
        EventKey::Command("shop"),
        EventKey::Callback(CALLBACK_INFO),
        EventKey::Callback(CALLBACK_BACK_TO_START),
    ];

    fn store_url() -> Url {
        Url::parse("https://store.example.com/").unwrap()
    }

    fn ctx<'a>(url: &'a Url) -> RenderContext<'a> {
        RenderContext {
            first_name: "Ana",
            web_app_url: url,
        }
    }

    /// `/start` sends the welcome message: greeting with the user's
    /// name, one row with the open-store and info buttons.
    #[test]
    fn test_start_sends_welcome_with_store_and_info_buttons() {
        let url = store_url();

        let action = route(EventKey::Command("start"), &ctx(&url)).unwrap();
        let RenderAction::Send(template) = action else {
            panic!("start must send a fresh message");
        };

        assert!(template.text.contains("Ana"));
        assert_eq!(template.format, TextFormat::Plain);
        assert_eq!(template.keyboard.len(), 1);

        let row = &template.keyboard[0];
        assert_eq!(row.len(), 2);
        assert!(row[0].label.contains("Open store"));
        assert_eq!(row[0].action, ButtonAction::OpenWebApp(url.clone()));
        assert!(row[1].label.contains("Info"));
        assert_eq!(row[1].action, ButtonAction::Callback(CALLBACK_INFO));
    }

    /// `/help` sends usage text with zero buttons.
    #[test]
    fn test_help_sends_text_without_keyboard() {
        let url = store_url();

        let action = route(EventKey::Command("help"), &ctx(&url)).unwrap();
        let RenderAction::Send(template) = action else {
            panic!("help must send a fresh message");
        };

        assert_eq!(template.format, TextFormat::Html);
        assert!(template.keyboard.is_empty());
        assert!(template.text.contains("/start"));
        assert!(template.text.contains("/help"));
        assert!(template.text.contains("/shop"));
    }

    /// `/shop` sends the quick-access prompt with a single open-store
    /// button.
    #[test]
    fn test_shop_sends_single_open_store_button() {
        let url = store_url();

        let action = route(EventKey::Command("shop"), &ctx(&url)).unwrap();
        let RenderAction::Send(template) = action else {
            panic!("shop must send a fresh message");
        };

        assert_eq!(template.keyboard.len(), 1);
        assert_eq!(template.keyboard[0].len(), 1);
        assert_eq!(
            template.keyboard[0][0].action,
            ButtonAction::OpenWebApp(url.clone())
        );
    }

    /// The `info` callback edits the originating message into the info
    /// view, which carries a single back button.
    #[test]
    fn test_info_callback_edits_to_info_view() {
        let url = store_url();

        let action = route(EventKey::Callback(CALLBACK_INFO), &ctx(&url)).unwrap();
        let RenderAction::EditInPlace(template) = action else {
            panic!("info must edit the originating message");
        };

        assert_eq!(template.format, TextFormat::Html);
        assert_eq!(template.keyboard.len(), 1);

        let row = &template.keyboard[0];
        assert_eq!(row.len(), 1);
        assert!(row[0].label.contains("Back"));
        assert_eq!(row[0].action, ButtonAction::Callback(CALLBACK_BACK_TO_START));
    }

    /// Round trip: going to the info view and back restores a template
    /// byte-identical to the original `/start` render.
    #[test]
    fn test_back_to_start_restores_welcome_exactly() {
        let url = store_url();
        let ctx = ctx(&url);

        let start = route(EventKey::Command("start"), &ctx).unwrap();
        let back = route(EventKey::Callback(CALLBACK_BACK_TO_START), &ctx).unwrap();

        // Same content, different action kinds: commands send, callbacks edit.
        assert_eq!(start.template(), back.template());
        assert!(matches!(start, RenderAction::Send(_)));
        assert!(matches!(back, RenderAction::EditInPlace(_)));
    }

    /// Keys outside the table produce no render action at all.
    #[test]
    fn test_unknown_keys_are_silent_noops() {
        let url = store_url();
        let ctx = ctx(&url);

        assert_eq!(route(EventKey::Command("admin"), &ctx), None);
        assert_eq!(route(EventKey::Command(""), &ctx), None);
        assert_eq!(route(EventKey::Callback("buy_now"), &ctx), None);
        assert_eq!(route(EventKey::Callback(""), &ctx), None);
    }

    /// Commands and callbacks are separate namespaces; a key from one
    /// never routes through the other.
    #[test]
    fn test_namespaces_do_not_overlap() {
        let url = store_url();
        let ctx = ctx(&url);

        assert_eq!(route(EventKey::Command(CALLBACK_INFO), &ctx), None);
        assert_eq!(route(EventKey::Command(CALLBACK_BACK_TO_START), &ctx), None);
        assert_eq!(route(EventKey::Callback("start"), &ctx), None);
        assert_eq!(route(EventKey::Callback("help"), &ctx), None);
        assert_eq!(route(EventKey::Callback("shop"), &ctx), None);
    }

    /// Closed world: every callback button on every template references
    /// a key the callback namespace can route.
    #[test]
    fn test_callback_buttons_reference_routable_keys() {
        let url = store_url();
        let ctx = ctx(&url);

        for key in ALL_KEYS {
            let action = route(key, &ctx).unwrap();
            for row in &action.template().keyboard {
                for button in row {
                    if let ButtonAction::Callback(payload) = button.action {
                        assert!(
                            route(EventKey::Callback(payload), &ctx).is_some(),
                            "dangling callback payload {payload:?} on {key:?}"
                        );
                    }
                }
            }
        }
    }

    /// Every web-app button carries exactly the configured URL, whatever
    /// that URL is.
    #[test]
    fn test_web_app_buttons_carry_configured_url() {
        for raw in ["https://store.example.com/", "https://other.example.org/app"] {
            let url = Url::parse(raw).unwrap();
            let ctx = ctx(&url);

            for key in ALL_KEYS {
                let action = route(key, &ctx).unwrap();
                for row in &action.template().keyboard {
                    for button in row {
                        if let ButtonAction::OpenWebApp(target) = &button.action {
                            assert_eq!(target, &url, "hardcoded URL on {key:?}");
                        }
                    }
                }
            }
        }
    }
}
