use dioxus::prelude::*;

use crate::core::dom;
use crate::core::storage::DefaultStore;
use crate::locale::LocaleController;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;
#[cfg(target_arch = "wasm32")]
use crate::core::share::{self, ShareOutcome};

/// QR artwork, shared with the hero card's preview thumbnail.
pub const QR_ASSET: Asset = asset!("/assets/qr.svg");
#[cfg(target_arch = "wasm32")]
const QR_SVG_MARKUP: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/qr.svg"));

/// The link the QR artwork encodes; copy/share hand out the same URL.
pub const CHANNEL_URL: &str = "https://t.me/finovaan";

/// Transient feedback under the action row. Reverts to `Idle` ~1.2 s after a
/// confirmation; a newer confirmation restarts the window via the epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ActionStatus {
    Idle,
    Copied,
    Failed,
}

#[cfg(target_arch = "wasm32")]
const CONFIRM_MS: u32 = 1_200;

#[cfg(target_arch = "wasm32")]
fn confirm_transiently(
    mut status: Signal<ActionStatus>,
    mut epoch: Signal<u64>,
    outcome: ActionStatus,
) {
    status.set(outcome);
    let armed = epoch() + 1;
    epoch.set(armed);
    platform::spawn_future(async move {
        gloo_timers::future::TimeoutFuture::new(CONFIRM_MS).await;
        if epoch() == armed {
            status.set(ActionStatus::Idle);
        }
    });
}

/// Dialog shown over the page with the channel QR code and copy / share /
/// download actions. Focus moves to the close control on open; body scroll
/// is locked while the dialog is up and restored on close.
#[component]
pub fn QrModal(open: Signal<bool>) -> Element {
    let locale_controller = use_context::<Signal<LocaleController<DefaultStore>>>();
    let strings = locale_controller.read().strings();

    let status = use_signal(|| ActionStatus::Idle);
    let status_epoch = use_signal(|| 0u64);

    use_effect(move || {
        if open() {
            dom::lock_body_scroll(true);
            dom::focus_element("qr-close");
        } else {
            dom::lock_body_scroll(false);
        }
    });

    let mut close = open;
    let on_close = move |_| close.set(false);

    let copy_handler = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            platform::spawn_future(async move {
                match share::copy_to_clipboard(CHANNEL_URL.to_string()).await {
                    Ok(()) => confirm_transiently(status, status_epoch, ActionStatus::Copied),
                    Err(_) => confirm_transiently(status, status_epoch, ActionStatus::Failed),
                }
            });
        }
    };

    let share_handler = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            platform::spawn_future(async move {
                match share::share_link("Finovaan", "Finovaan", CHANNEL_URL).await {
                    // The native sheet is its own feedback; dismissal is not an error.
                    Ok(ShareOutcome::Shared) | Ok(ShareOutcome::Cancelled) => {}
                    // No share sheet on this platform: degrade to copy.
                    Ok(ShareOutcome::Unsupported) => {
                        match share::copy_to_clipboard(CHANNEL_URL.to_string()).await {
                            Ok(()) => {
                                confirm_transiently(status, status_epoch, ActionStatus::Copied)
                            }
                            Err(_) => {
                                confirm_transiently(status, status_epoch, ActionStatus::Failed)
                            }
                        }
                    }
                    Err(_) => confirm_transiently(status, status_epoch, ActionStatus::Failed),
                }
            });
        }
    };

    let download_handler = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            platform::spawn_future(async move {
                let bytes = QR_SVG_MARKUP.as_bytes().to_vec();
                if share::download_bytes("finovaan-qr.svg", "image/svg+xml", bytes)
                    .await
                    .is_err()
                {
                    confirm_transiently(status, status_epoch, ActionStatus::Failed);
                }
            });
        }
    };

    let feedback = match status() {
        ActionStatus::Idle => None,
        ActionStatus::Copied => Some(("qr-modal__feedback", strings.qr_copied)),
        ActionStatus::Failed => Some(("qr-modal__feedback qr-modal__feedback--error", "✕")),
    };

    rsx! {
        if open() {
            div { class: "qr-overlay", onclick: on_close,
                div {
                    class: "qr-modal",
                    role: "dialog",
                    aria_modal: "true",
                    aria_labelledby: "qr-modal-title",
                    // Keep clicks inside the dialog from reaching the overlay.
                    onclick: move |evt| evt.stop_propagation(),

                    button {
                        id: "qr-close",
                        r#type: "button",
                        class: "qr-modal__close",
                        aria_label: "{strings.qr_close}",
                        onclick: on_close,
                        "×"
                    }

                    h2 { id: "qr-modal-title", "{strings.qr_modal_title}" }
                    img { class: "qr-modal__code", src: QR_ASSET, alt: "{strings.qr_caption}" }
                    p { class: "qr-caption", "{strings.qr_caption}" }

                    div { class: "qr-modal__actions",
                        button {
                            r#type: "button",
                            class: "btn primary",
                            onclick: copy_handler,
                            "{strings.qr_copy}"
                        }
                        button {
                            r#type: "button",
                            class: "btn ghost",
                            onclick: share_handler,
                            "{strings.qr_share}"
                        }
                        button {
                            r#type: "button",
                            class: "btn ghost",
                            onclick: download_handler,
                            "{strings.qr_download}"
                        }
                    }

                    if let Some((class_name, message)) = feedback {
                        p { class: "{class_name}", "{message}" }
                    }
                }
            }
        }
    }
}
