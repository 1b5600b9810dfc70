use dioxus::prelude::*;

use ui::components::site_header::toggle_theme;
use ui::components::SiteHeader;
use ui::core::dom::{self, KeyPress};
use ui::core::platform;
use ui::core::storage::{default_store, DefaultStore};
use ui::locale::{self, LocaleController};
use ui::subscribe::SubscriptionLedger;
use ui::theme::{self, ThemeController};
use ui::views::Home;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One controller per persisted concern; each resolves its startup value
    // from the store and the platform probes exactly once.
    let theme_controller = use_signal(|| {
        ThemeController::initialize(default_store(), platform::system_prefers_light()).0
    });
    let locale_controller = use_signal(|| {
        LocaleController::initialize(default_store(), platform::browser_language().as_deref()).0
    });
    let ledger = use_signal(|| SubscriptionLedger::<DefaultStore>::initialize(default_store()));
    let scroll_y = use_signal(|| 0.0f64);
    let qr_open = use_signal(|| false);

    use_context_provider(|| theme_controller);
    use_context_provider(|| locale_controller);
    use_context_provider(|| ledger);
    use_context_provider(|| scroll_y);
    use_context_provider(|| qr_open);

    // Document sync + page-lifetime listeners, wired once.
    use_hook(move || {
        theme::sync_document(theme_controller.peek().theme());
        locale::sync_document(locale_controller.peek().locale());

        let mut scroll = scroll_y;
        dom::on_window_scroll(move |offset| scroll.set(offset));

        let mut open = qr_open;
        let mut locale_signal = locale_controller;
        dom::on_document_keydown(move |press: KeyPress| {
            if press.key == "Tab" {
                dom::set_root_class("using-keyboard", true);
                return;
            }
            if press.from_editable {
                return;
            }
            match press.key.as_str() {
                "Escape" => open.set(false),
                "t" => toggle_theme(theme_controller),
                "l" => {
                    let outcome = locale_signal.write().toggle();
                    locale::sync_document(outcome.locale);
                }
                _ => {}
            }
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SiteHeader {}
        Home {}
    }
}
