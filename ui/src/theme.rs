//! Light/dark theme preference: resolution, persistence, and the state the
//! toggle control renders from.
//!
//! Resolution order at startup: persisted preference → system
//! `prefers-color-scheme` hint → dark (the page's unmarked default). The
//! resolved value is written back so the next visit skips the probe.
//!
//! The ~400 ms `theme-transition` marker is purely cosmetic. It is guarded
//! by an epoch counter: re-applying a theme while the previous transition is
//! still pending restarts the window instead of stacking clears.

use crate::core::dom;
use crate::core::storage::{KeyValueStore, StorageError};

/// Storage key, shared with the original page so existing visitors keep
/// their choice.
pub const THEME_KEY: &str = "finovaan:theme";

/// How long the cosmetic transition marker stays on the root element.
pub const TRANSITION_MS: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn storage_tag(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Where the initial theme came from, mostly for tests and debug traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Persisted,
    SystemHint,
    Default,
}

/// What a theme mutation did. `persisted` is false when storage was
/// unavailable; the in-memory state still changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOutcome {
    pub theme: Theme,
    pub persisted: bool,
    /// Pass back to [`ThemeController::clear_transition`] once the cosmetic
    /// delay elapses.
    pub transition_epoch: u64,
}

#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    theme: Theme,
    transition_epoch: u64,
    transitioning: bool,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Resolve and apply the startup theme. The caller provides the system
    /// hint (`Some(true)` = prefers light) so the resolution order stays a
    /// pure function of its inputs.
    pub fn initialize(store: S, system_prefers_light: Option<bool>) -> (Self, ThemeSource) {
        let stored = store
            .get(THEME_KEY)
            .ok()
            .flatten()
            .and_then(|tag| Theme::from_tag(&tag));

        let (theme, source) = match stored {
            Some(theme) => (theme, ThemeSource::Persisted),
            None => match system_prefers_light {
                Some(true) => (Theme::Light, ThemeSource::SystemHint),
                Some(false) => (Theme::Dark, ThemeSource::SystemHint),
                None => (Theme::Dark, ThemeSource::Default),
            },
        };

        let mut controller = Self {
            store,
            theme,
            transition_epoch: 0,
            transitioning: false,
        };
        let _ = controller.persist(theme);
        (controller, source)
    }

    /// Apply `theme`: update state, persist, start the transition window.
    pub fn set_theme(&mut self, theme: Theme) -> ThemeOutcome {
        self.theme = theme;
        self.transitioning = true;
        self.transition_epoch += 1;
        let persisted = self.persist(theme).is_ok();
        ThemeOutcome {
            theme,
            persisted,
            transition_epoch: self.transition_epoch,
        }
    }

    pub fn toggle(&mut self) -> ThemeOutcome {
        self.set_theme(self.theme.other())
    }

    /// Clear the cosmetic transition marker, but only if no newer switch
    /// restarted the window in the meantime. Returns whether it cleared.
    pub fn clear_transition(&mut self, epoch: u64) -> bool {
        if self.transition_epoch == epoch {
            self.transitioning = false;
            true
        } else {
            false
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Toggle-control glyph: sun while light is applied, moon otherwise.
    pub fn glyph(&self) -> &'static str {
        match self.theme {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    /// `aria-pressed` for the toggle control (pressed = light, as on the
    /// original page).
    pub fn is_pressed(&self) -> bool {
        self.theme == Theme::Light
    }

    fn persist(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(THEME_KEY, theme.storage_tag())
    }
}

/// Mirror the applied theme onto `<html data-theme>`; dark is expressed by
/// removing the attribute, matching the stylesheet's dark-default tokens.
pub fn sync_document(theme: Theme) {
    match theme {
        Theme::Light => dom::set_root_attribute("data-theme", Some("light")),
        Theme::Dark => dom::set_root_attribute("data-theme", None),
    }
}

/// Raise the cosmetic transition marker on the document root.
pub fn begin_document_transition() {
    dom::set_root_class("theme-transition", true);
}

/// Drop the transition marker once the delay elapsed.
pub fn end_document_transition() {
    dom::set_root_class("theme-transition", false);
}
