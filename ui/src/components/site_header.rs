use dioxus::prelude::*;

use crate::core::storage::DefaultStore;
use crate::locale::{self, LocaleController};
use crate::theme::{self, ThemeController};

// Header stylesheet (scrolled state, toggle buttons, brand)
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Toggle the theme and mirror it onto the document, including the
/// restart-safe ~400 ms transition marker. Shared between the header button
/// and the `t` keyboard shortcut.
pub fn toggle_theme(mut controller: Signal<ThemeController<DefaultStore>>) {
    let outcome = controller.write().toggle();
    theme::sync_document(outcome.theme);
    theme::begin_document_transition();

    #[cfg(target_arch = "wasm32")]
    {
        crate::core::platform::spawn_future(async move {
            gloo_timers::future::TimeoutFuture::new(theme::TRANSITION_MS).await;
            // A later switch restarted the window; leave its marker alone.
            if controller.write().clear_transition(outcome.transition_epoch) {
                theme::end_document_transition();
            }
        });
    }
}

/// Fixed site header: brand, theme toggle, language toggle. Picks up the
/// `scrolled` styling once the page moves past the hero's first pixels.
#[component]
pub fn SiteHeader() -> Element {
    let theme_controller = use_context::<Signal<ThemeController<DefaultStore>>>();
    let mut locale_controller = use_context::<Signal<LocaleController<DefaultStore>>>();
    let scroll_y = use_context::<Signal<f64>>();

    let (glyph, theme_pressed) = {
        let controller = theme_controller.read();
        (controller.glyph(), controller.is_pressed())
    };
    let (toggle_label, locale_pressed) = {
        let controller = locale_controller.read();
        (controller.strings().toggle_label, controller.is_pressed())
    };

    #[cfg(debug_assertions)]
    println!("[render] SiteHeader (pressed: theme={theme_pressed} locale={locale_pressed})");

    let scrolled = scroll_y() > 20.0;
    let header_class = if scrolled {
        "site-header scrolled"
    } else {
        "site-header"
    };

    let on_theme_click = move |_| toggle_theme(theme_controller);
    let on_locale_click = move |_| {
        let outcome = locale_controller.write().toggle();
        locale::sync_document(outcome.locale);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { id: "site-header", class: "{header_class}",
            div { class: "header-inner",
                div { class: "brand",
                    span { class: "brand-spark", aria_hidden: "true" }
                    span { class: "brand-mark", "Finovaan" }
                }

                div { class: "header-controls",
                    button {
                        id: "langBtn",
                        r#type: "button",
                        class: "icon-button lang-button",
                        aria_pressed: "{locale_pressed}",
                        onclick: on_locale_click,
                        "{toggle_label}"
                    }
                    button {
                        id: "themeBtn",
                        r#type: "button",
                        class: "icon-button theme-button",
                        aria_pressed: "{theme_pressed}",
                        onclick: on_theme_click,
                        "{glyph}"
                    }
                }
            }
        }
    }
}
