#![cfg(test)]
/*!
Stylesheet lint for the web build.

Purpose:
- Ensure the selectors the Rust components render against (header scroll
  state, theme tokens, subscribe form feedback, QR modal) stay present in
  web/assets/main.css.
- Fail fast if a refactor drops or renames a class, preventing a silent
  styling regression.

How it works:
- The stylesheet is embedded at compile time with `include_str!` (same path
  the `asset!` in `web/src/main.rs` points to).
- A lightweight substring presence check is sufficient as an early warning;
  parsing CSS properly would add dependencies for no extra signal.

If you intentionally rename or remove a selector:
1. Update the component markup.
2. Adjust REQUIRED_SELECTORS accordingly.
*/

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

/// Selectors / tokens the components rely on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Theme tokens
    ":root",
    "[data-theme=\"light\"]",
    "html.theme-transition",
    "html.using-keyboard",
    // Layout
    "body {",
    ".page {",
    // Header scroll styling
    ".site-header",
    ".site-header.scrolled",
    // Buttons
    ".btn {",
    ".btn.primary",
    ".btn.ghost",
    // Hero + QR card
    ".hero {",
    ".hero-sub",
    ".hero-actions",
    ".qr-card",
    ".qr-caption",
    // Features
    ".features-grid",
    ".feature {",
    // Subscribe form
    ".subscribe {",
    ".subscribe-form",
    ".subscribe-input",
    ".form-message",
    ".form-message--ok",
    ".form-message--error",
    ".subscribe-counter",
    // Social cards
    ".social-card",
    // QR modal
    ".qr-overlay",
    ".qr-modal {",
    ".qr-modal__close",
    ".qr-modal__actions",
    ".qr-modal__feedback",
    // Footer
    ".site-footer",
    // Responsive block exists
    "@media (max-width: 720px)",
];

#[test]
fn stylesheet_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !MAIN_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in main stylesheet:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn stylesheet_not_trivially_empty() {
    let non_ws_len = MAIN_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Embedded stylesheet appears unexpectedly small ({non_ws_len} non-whitespace chars) – \
         did the file get truncated or the path change?"
    );
}

#[test]
fn light_theme_overrides_every_token_the_dark_default_declares() {
    // Token names declared under :root must reappear under the light theme,
    // otherwise a light/dark switch leaves stale colors behind.
    let root_block = block_after(MAIN_CSS, ":root");
    let light_block = block_after(MAIN_CSS, "[data-theme=\"light\"]");

    let mut missing = Vec::new();
    for line in root_block.lines() {
        let trimmed = line.trim();
        if let Some(name) = trimmed.strip_prefix("--").and_then(|l| l.split(':').next()) {
            let token = format!("--{name}");
            if !light_block.contains(&token) {
                missing.push(token);
            }
        }
    }
    assert!(
        missing.is_empty(),
        "Light theme is missing token overrides:\n{}",
        missing.join("\n")
    );
}

fn block_after<'a>(css: &'a str, selector: &str) -> &'a str {
    let start = css.find(selector).expect("selector present");
    let open = css[start..].find('{').expect("block opens") + start;
    let close = css[open..].find('}').expect("block closes") + open;
    &css[open + 1..close]
}
