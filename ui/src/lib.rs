//! Shared UI crate for the Finovaan landing page. All cross-platform logic
//! and views live here; the `web` crate only wires up the entrypoint.

pub mod core;
pub mod locale;
pub mod subscribe;
pub mod theme;
pub mod views;

pub mod components {
    // Site header with theme/language toggles (components/site_header.rs)
    pub mod site_header;
    pub use site_header::toggle_theme;
    pub use site_header::SiteHeader;

    // QR dialog with copy/share/download actions (components/qr_modal.rs)
    pub mod qr_modal;
    pub use qr_modal::QrModal;
}
