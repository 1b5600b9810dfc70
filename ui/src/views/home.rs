use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::components::qr_modal::{CHANNEL_URL, QR_ASSET};
use crate::components::QrModal;
use crate::core::storage::DefaultStore;
use crate::locale::{text_bindings, LocaleController, TextSlot};
use crate::subscribe::{SubmitOutcome, SubscriptionLedger};

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing locale refresh issues.
    println!("[render] Home (lang={lang})");
}

/// The whole landing page: hero with parallax, QR card, feature grid,
/// subscribe form with the displayed counter, footer with the current year.
///
/// Every translated slot is rendered from the declarative binding list, so
/// a locale switch is one dictionary swap away from a fully re-rendered
/// page.
#[component]
pub fn Home() -> Element {
    let locale_controller = use_context::<Signal<LocaleController<DefaultStore>>>();
    let mut ledger = use_context::<Signal<SubscriptionLedger<DefaultStore>>>();
    let scroll_y = use_context::<Signal<f64>>();
    let qr_open = use_context::<Signal<bool>>();

    let mut email_input = use_signal(String::new);
    let mut last_outcome = use_signal(|| None::<SubmitOutcome>);

    let strings = locale_controller.read().strings();
    let slots: BTreeMap<TextSlot, &'static str> = text_bindings(strings).into_iter().collect();

    #[cfg(debug_assertions)]
    log_home_render(locale_controller.read().locale().tag());

    // The outcome is stored, not the message, so the inline feedback follows
    // a locale switch.
    let form_message = last_outcome().map(|outcome| match outcome {
        SubmitOutcome::Subscribed { .. } => ("form-message form-message--ok", strings.msg_subscribed),
        SubmitOutcome::InvalidEmail => ("form-message form-message--error", strings.msg_invalid_email),
        SubmitOutcome::AlreadySubscribed => {
            ("form-message form-message--error", strings.msg_already_subscribed)
        }
    });

    let displayed_count = ledger.read().displayed_count();
    let counter_line = format!("{displayed_count}+ {}", strings.counter_label);

    let parallax = format!("transform: translateY({}px)", scroll_y() * 0.2);
    let year = time::OffsetDateTime::now_utc().year();

    let mut open_modal = qr_open;
    let on_submit = move |_: FormEvent| {
        let outcome = ledger.write().submit(&email_input());
        if matches!(outcome, SubmitOutcome::Subscribed { .. }) {
            email_input.set(String::new());
        }
        last_outcome.set(Some(outcome));
    };

    rsx! {
        main { class: "page",
            section { class: "hero", style: "{parallax}",
                div { class: "hero-copy",
                    h1 { id: "hero-title", {slots[&TextSlot::HeroTitle]} }
                    p { class: "hero-sub", {slots[&TextSlot::HeroSubtitle]} }
                    div { class: "hero-actions",
                        a {
                            class: "btn primary",
                            href: CHANNEL_URL,
                            {slots[&TextSlot::CtaChannel]}
                        }
                        a {
                            class: "btn ghost",
                            href: "mailto:hello@finovaan.example",
                            {slots[&TextSlot::CtaContact]}
                        }
                    }
                }
                aside { class: "qr-card",
                    button {
                        r#type: "button",
                        class: "qr-card__open",
                        onclick: move |_| open_modal.set(true),
                        img {
                            class: "qr-card__thumb",
                            src: QR_ASSET,
                            alt: slots[&TextSlot::QrCaption],
                        }
                    }
                    p { class: "qr-caption", {slots[&TextSlot::QrCaption]} }
                }
            }

            section { class: "features",
                h2 { id: "features-title", {slots[&TextSlot::FeaturesTitle]} }
                div { class: "features-grid",
                    article { class: "feature",
                        h3 { {slots[&TextSlot::FeatureVideos]} }
                    }
                    article { class: "feature",
                        h3 { {slots[&TextSlot::FeatureAnalysis]} }
                    }
                    article { class: "feature",
                        h3 { {slots[&TextSlot::FeatureResources]} }
                    }
                }
            }

            section { class: "subscribe",
                h2 { "{strings.subscribe_title}" }
                form { class: "subscribe-form", novalidate: true, onsubmit: on_submit,
                    input {
                        r#type: "email",
                        class: "subscribe-input",
                        placeholder: "{strings.email_placeholder}",
                        value: "{email_input()}",
                        oninput: move |evt| email_input.set(evt.value()),
                    }
                    button { r#type: "submit", class: "btn primary", "{strings.subscribe_button}" }
                }
                if let Some((class_name, message)) = form_message {
                    p { class: "{class_name}", "{message}" }
                }
                p { class: "subscribe-counter", "{counter_line}" }
            }

            section { class: "social",
                a {
                    class: "social-card",
                    href: CHANNEL_URL,
                    tabindex: "0",
                    "Telegram"
                }
                a {
                    class: "social-card",
                    href: "https://instagram.com/finovaan",
                    tabindex: "0",
                    "Instagram"
                }
            }

            footer { class: "site-footer",
                span { id: "year", "{year}" }
                span { class: "footer-rights", "{strings.footer_rights}" }
            }
        }

        QrModal { open: qr_open }
    }
}
