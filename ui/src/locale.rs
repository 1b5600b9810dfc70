//! Two-locale (Persian/English) UI text: static dictionary, declarative
//! slot bindings, and the controller that owns the persisted preference.
//!
//! Persian is the page's default. Switching locale is atomic: the view
//! re-renders every slot from one dictionary record and the document root
//! picks up `lang`/`dir` in the same pass, so no partially translated state
//! is ever visible.
//!
//! Resolution order at startup: persisted preference → browser-reported
//! language (`en*` → English, anything else → Persian) → Persian.

use crate::core::dom;
use crate::core::storage::{KeyValueStore, StorageError};

/// Storage key for the locale preference.
pub const LOCALE_KEY: &str = "finovaan:lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Fa,
    En,
}

/// Text direction the document root must carry for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Direction {
    pub fn attr(self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}

pub const DEFAULT_LOCALE: Locale = Locale::Fa;

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Fa => "fa",
            Locale::En => "en",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "fa" => Some(Locale::Fa),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn dir(self) -> Direction {
        match self {
            Locale::Fa => Direction::Rtl,
            Locale::En => Direction::Ltr,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Locale::Fa => Locale::En,
            Locale::En => Locale::Fa,
        }
    }

    pub fn strings(self) -> &'static LocaleStrings {
        match self {
            Locale::Fa => &FA,
            Locale::En => &EN,
        }
    }
}

/// The full set of display strings for one locale. Compiled in, immutable.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_channel: &'static str,
    pub cta_contact: &'static str,
    pub qr_caption: &'static str,
    pub features_title: &'static str,
    pub feature_videos: &'static str,
    pub feature_analysis: &'static str,
    pub feature_resources: &'static str,
    pub toggle_label: &'static str,
    pub subscribe_title: &'static str,
    pub email_placeholder: &'static str,
    pub subscribe_button: &'static str,
    pub msg_invalid_email: &'static str,
    pub msg_already_subscribed: &'static str,
    pub msg_subscribed: &'static str,
    pub counter_label: &'static str,
    pub qr_modal_title: &'static str,
    pub qr_copy: &'static str,
    pub qr_copied: &'static str,
    pub qr_share: &'static str,
    pub qr_download: &'static str,
    pub qr_close: &'static str,
    pub footer_rights: &'static str,
}

pub static FA: LocaleStrings = LocaleStrings {
    title: "فینووان — شفافیت مالی در یک نگاه",
    subtitle: "آموزش‌های کوتاه، تحلیل‌های کاربردی و منابع رویدادی برای دانشجویان و حرفه‌ای‌ها. همراه ما باشید.",
    cta_channel: "دیدن کانال",
    cta_contact: "تماس",
    qr_caption: "اسکن در رویدادها",
    features_title: "آنچه ارائه می‌دهیم",
    feature_videos: "ویدئوهای کوتاه",
    feature_analysis: "تحلیل‌ها",
    feature_resources: "منابع رویداد",
    toggle_label: "فارسی",
    subscribe_title: "عضویت در خبرنامه",
    email_placeholder: "ایمیل شما",
    subscribe_button: "عضویت",
    msg_invalid_email: "ایمیل واردشده معتبر نیست",
    msg_already_subscribed: "این ایمیل قبلاً عضو شده است",
    msg_subscribed: "عضویت شما ثبت شد",
    counter_label: "مشترک",
    qr_modal_title: "اسکن کنید",
    qr_copy: "کپی لینک",
    qr_copied: "کپی شد!",
    qr_share: "اشتراک‌گذاری",
    qr_download: "دانلود",
    qr_close: "بستن",
    footer_rights: "کلیه حقوق محفوظ است",
};

pub static EN: LocaleStrings = LocaleStrings {
    title: "Finovaan — Financial clarity, fast.",
    subtitle: "Bite-sized lessons, practical analysis and event-friendly resources for learners and practitioners.",
    cta_channel: "Visit Channel",
    cta_contact: "Contact",
    qr_caption: "Scan at events",
    features_title: "What we offer",
    feature_videos: "Short videos",
    feature_analysis: "Analysis",
    feature_resources: "Event resources",
    toggle_label: "EN",
    subscribe_title: "Join the newsletter",
    email_placeholder: "Your email",
    subscribe_button: "Subscribe",
    msg_invalid_email: "That email address doesn't look valid",
    msg_already_subscribed: "You're already subscribed",
    msg_subscribed: "You're in — thanks for subscribing",
    counter_label: "subscribers",
    qr_modal_title: "Scan me",
    qr_copy: "Copy link",
    qr_copied: "Copied!",
    qr_share: "Share",
    qr_download: "Download",
    qr_close: "Close",
    footer_rights: "All rights reserved",
};

/// Dictionary lookup by raw tag. Unknown tags fall back to the default
/// locale's record; the dictionary is total over {fa, en}, so the fallback
/// is currently unreachable, but callers holding arbitrary tags keep a
/// defined answer.
pub fn lookup(tag: &str) -> &'static LocaleStrings {
    Locale::from_tag(tag).unwrap_or(DEFAULT_LOCALE).strings()
}

/// A display slot the locale swap rewrites. Adding a slot means adding a
/// binding below plus a place in the markup, nothing in the control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TextSlot {
    HeroTitle,
    HeroSubtitle,
    CtaChannel,
    CtaContact,
    QrCaption,
    FeaturesTitle,
    FeatureVideos,
    FeatureAnalysis,
    FeatureResources,
}

/// Declarative (slot, text) bindings for one resolved dictionary record.
pub fn text_bindings(strings: &'static LocaleStrings) -> [(TextSlot, &'static str); 9] {
    [
        (TextSlot::HeroTitle, strings.title),
        (TextSlot::HeroSubtitle, strings.subtitle),
        (TextSlot::CtaChannel, strings.cta_channel),
        (TextSlot::CtaContact, strings.cta_contact),
        (TextSlot::QrCaption, strings.qr_caption),
        (TextSlot::FeaturesTitle, strings.features_title),
        (TextSlot::FeatureVideos, strings.feature_videos),
        (TextSlot::FeatureAnalysis, strings.feature_analysis),
        (TextSlot::FeatureResources, strings.feature_resources),
    ]
}

/// Where the initial locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Persisted,
    BrowserLocale,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleOutcome {
    pub locale: Locale,
    pub persisted: bool,
}

#[derive(Debug)]
pub struct LocaleController<S> {
    store: S,
    locale: Locale,
}

impl<S: KeyValueStore> LocaleController<S> {
    /// Resolve the startup locale and persist the result. The browser tag is
    /// passed in (rather than read ambiently) so the order stays testable.
    pub fn initialize(store: S, browser_language: Option<&str>) -> (Self, LocaleSource) {
        let stored = store
            .get(LOCALE_KEY)
            .ok()
            .flatten()
            .and_then(|tag| Locale::from_tag(&tag));

        let (locale, source) = match stored {
            Some(locale) => (locale, LocaleSource::Persisted),
            None => match browser_language {
                Some(tag) if tag.starts_with("en") => (Locale::En, LocaleSource::BrowserLocale),
                Some(_) => (Locale::Fa, LocaleSource::BrowserLocale),
                None => (DEFAULT_LOCALE, LocaleSource::Default),
            },
        };

        let mut controller = Self { store, locale };
        let _ = controller.persist(locale);
        (controller, source)
    }

    /// Apply `locale`: update state and persist. The caller re-renders every
    /// slot from [`text_bindings`] and mirrors `lang`/`dir` via
    /// [`sync_document`], keeping the switch atomic.
    pub fn apply_locale(&mut self, locale: Locale) -> LocaleOutcome {
        self.locale = locale;
        let persisted = self.persist(locale).is_ok();
        LocaleOutcome { locale, persisted }
    }

    pub fn toggle(&mut self) -> LocaleOutcome {
        self.apply_locale(self.locale.other())
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn strings(&self) -> &'static LocaleStrings {
        self.locale.strings()
    }

    /// `aria-pressed` for the language toggle (pressed = English).
    pub fn is_pressed(&self) -> bool {
        self.locale == Locale::En
    }

    fn persist(&mut self, locale: Locale) -> Result<(), StorageError> {
        self.store.set(LOCALE_KEY, locale.tag())
    }
}

/// Mirror the resolved locale onto `<html lang dir>`.
pub fn sync_document(locale: Locale) {
    dom::set_document_language(locale.tag(), locale.dir().attr());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn resolution_prefers_persisted_then_browser_then_default() {
        let store = MemoryStore::new();
        store.set(LOCALE_KEY, "en").unwrap();
        let (controller, source) = LocaleController::initialize(store, Some("fa-IR"));
        assert_eq!(controller.locale(), Locale::En);
        assert_eq!(source, LocaleSource::Persisted);

        let (controller, source) =
            LocaleController::initialize(MemoryStore::new(), Some("en-GB"));
        assert_eq!(controller.locale(), Locale::En);
        assert_eq!(source, LocaleSource::BrowserLocale);

        let (controller, _) = LocaleController::initialize(MemoryStore::new(), Some("de-DE"));
        assert_eq!(controller.locale(), Locale::Fa);

        let (controller, source) = LocaleController::initialize(MemoryStore::new(), None);
        assert_eq!(controller.locale(), Locale::Fa);
        assert_eq!(source, LocaleSource::Default);
    }

    #[test]
    fn locale_round_trip_restores_english_strings() {
        let (mut controller, _) = LocaleController::initialize(MemoryStore::new(), None);

        controller.apply_locale(Locale::En);
        let reference = text_bindings(controller.strings());

        controller.apply_locale(Locale::Fa);
        controller.apply_locale(Locale::En);
        let restored = text_bindings(controller.strings());

        assert_eq!(reference, restored);
        for (slot, text) in restored {
            assert!(!text.is_empty(), "slot {slot:?} lost its text");
        }
    }

    #[test]
    fn direction_follows_locale_on_every_switch() {
        let (mut controller, _) = LocaleController::initialize(MemoryStore::new(), None);

        for _ in 0..3 {
            let locale = controller.toggle().locale;
            match locale {
                Locale::Fa => {
                    assert_eq!(locale.dir(), Direction::Rtl);
                    assert_eq!(locale.tag(), "fa");
                }
                Locale::En => {
                    assert_eq!(locale.dir(), Direction::Ltr);
                    assert_eq!(locale.tag(), "en");
                }
            }
        }
    }

    #[test]
    fn unknown_tag_falls_back_to_default_dictionary() {
        assert!(std::ptr::eq(lookup("de"), DEFAULT_LOCALE.strings()));
        assert!(std::ptr::eq(lookup("en"), &EN));
    }

    #[test]
    fn apply_persists_and_toggle_alternates() {
        let store = MemoryStore::new();
        let handle = store.clone();
        let (mut controller, _) = LocaleController::initialize(store, None);

        controller.toggle();
        assert_eq!(handle.get(LOCALE_KEY), Ok(Some("en".to_string())));
        assert!(controller.is_pressed());

        controller.toggle();
        assert_eq!(handle.get(LOCALE_KEY), Ok(Some("fa".to_string())));
        assert!(!controller.is_pressed());
    }

    #[test]
    fn storage_failure_still_switches_in_memory() {
        let (mut controller, _) = LocaleController::initialize(MemoryStore::unavailable(), None);
        let outcome = controller.apply_locale(Locale::En);
        assert!(!outcome.persisted);
        assert_eq!(controller.locale(), Locale::En);
        assert_eq!(controller.strings().title, EN.title);
    }
}
