//! Front-end subscription ledger: validated emails appended to a persisted
//! list, plus the displayed counter seeded with a fixed baseline.
//!
//! The displayed counter and the list are persisted under separate keys, so
//! one write can survive while the other fails. They are reconciled at
//! startup as `max(stored_counter, SEED + list_len)`: a list write that
//! outlived a counter write can only leave the display too low, and the
//! floor repairs exactly that, without ever moving the counter backwards.

use crate::core::storage::{KeyValueStore, StorageError};

pub const SUBSCRIBERS_KEY: &str = "finovaan:subscribers";
pub const COUNTER_KEY: &str = "finovaan:subscriber-count";

/// The fake baseline the counter starts from on a fresh profile.
pub const SEED_COUNT: u64 = 1245;

/// A syntactically plausible email address. Validation is intentionally
/// loose (`\S+@\S+\.\S+` semantics after trimming): some non-space run, an
/// `@`, and a dotted domain-like suffix. Not RFC 5322.
///
/// Serializes as the bare string, so the persisted list stays a plain JSON
/// array of email strings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(input: &str) -> Result<Self, String> {
        let trimmed = input.trim();
        if Self::looks_like_email(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(format!("{trimmed} is not a valid email address"))
        }
    }

    fn looks_like_email(candidate: &str) -> bool {
        if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = candidate.split_once('@') else {
            return false;
        };
        if local.is_empty() {
            return false;
        }
        match domain.rsplit_once('.') {
            Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
            None => false,
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// What a submission did. Validation failures are values, never errors; the
/// view maps each variant to a localized inline message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Subscribed {
        displayed_count: u64,
        /// False when either the list or the counter write failed; the
        /// in-memory state still advanced for this session.
        persisted: bool,
    },
    InvalidEmail,
    AlreadySubscribed,
}

#[derive(Debug)]
pub struct SubscriptionLedger<S> {
    store: S,
    emails: Vec<SubscriberEmail>,
    displayed_count: u64,
}

impl<S: KeyValueStore> SubscriptionLedger<S> {
    /// Load persisted state, seed the counter on first run, reconcile drift.
    /// Stored entries were validated when written, so they are trusted here.
    pub fn initialize(store: S) -> Self {
        let emails: Vec<SubscriberEmail> = store
            .get(SUBSCRIBERS_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        let stored_count = store
            .get(COUNTER_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.parse::<u64>().ok());

        let floor = SEED_COUNT + emails.len() as u64;
        let displayed_count = stored_count.map_or(floor, |count| count.max(floor));

        let mut ledger = Self {
            store,
            emails,
            displayed_count,
        };
        let _ = ledger.persist_counter();
        ledger
    }

    /// Validate and record one submission.
    pub fn submit(&mut self, input: &str) -> SubmitOutcome {
        let email = match SubscriberEmail::parse(input) {
            Ok(email) => email,
            Err(_) => return SubmitOutcome::InvalidEmail,
        };

        // Exact-string duplicate detection; no case folding beyond the trim.
        if self.emails.iter().any(|known| known == &email) {
            return SubmitOutcome::AlreadySubscribed;
        }

        self.emails.push(email);
        self.displayed_count += 1;

        let list_saved = self.persist_list().is_ok();
        let counter_saved = self.persist_counter().is_ok();

        SubmitOutcome::Subscribed {
            displayed_count: self.displayed_count,
            persisted: list_saved && counter_saved,
        }
    }

    pub fn displayed_count(&self) -> u64 {
        self.displayed_count
    }

    pub fn subscriber_total(&self) -> usize {
        self.emails.len()
    }

    fn persist_list(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.emails).map_err(|_| StorageError::WriteRejected)?;
        self.store.set(SUBSCRIBERS_KEY, &raw)
    }

    fn persist_counter(&mut self) -> Result<(), StorageError> {
        self.store
            .set(COUNTER_KEY, &self.displayed_count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn plausible_addresses_parse() {
        for candidate in ["a@b.com", " padded@site.io ", "first.last@sub.domain.org"] {
            assert!(SubscriberEmail::parse(candidate).is_ok(), "{candidate}");
        }
    }

    #[test]
    fn implausible_addresses_are_rejected() {
        for candidate in [
            "",
            "   ",
            "no-at.com",
            "missing-dot@domain",
            "@nobody.com",
            "trailing-dot@domain.",
            "spaced out@domain.com",
        ] {
            assert!(SubscriberEmail::parse(candidate).is_err(), "{candidate:?}");
        }
    }

    #[test]
    fn counter_seeds_to_baseline_then_increments() {
        let store = MemoryStore::new();
        let handle = store.clone();
        let mut ledger = SubscriptionLedger::initialize(store);
        assert_eq!(ledger.displayed_count(), SEED_COUNT);
        assert_eq!(handle.get(COUNTER_KEY), Ok(Some("1245".to_string())));

        let outcome = ledger.submit("reader@finovaan.example");
        assert_eq!(
            outcome,
            SubmitOutcome::Subscribed {
                displayed_count: SEED_COUNT + 1,
                persisted: true,
            }
        );
        assert_eq!(handle.get(COUNTER_KEY), Ok(Some("1246".to_string())));
    }

    #[test]
    fn duplicate_email_rejected_once_counted_once() {
        let mut ledger = SubscriptionLedger::initialize(MemoryStore::new());

        assert!(matches!(
            ledger.submit("a@b.com"),
            SubmitOutcome::Subscribed { .. }
        ));
        assert_eq!(ledger.submit("a@b.com"), SubmitOutcome::AlreadySubscribed);

        assert_eq!(ledger.subscriber_total(), 1);
        assert_eq!(ledger.displayed_count(), SEED_COUNT + 1);
    }

    #[test]
    fn trim_applies_before_duplicate_detection() {
        let mut ledger = SubscriptionLedger::initialize(MemoryStore::new());
        ledger.submit("a@b.com");
        assert_eq!(
            ledger.submit("  a@b.com  "),
            SubmitOutcome::AlreadySubscribed
        );
        // Case differences are distinct subscribers by design.
        assert!(matches!(
            ledger.submit("A@b.com"),
            SubmitOutcome::Subscribed { .. }
        ));
        assert_eq!(ledger.subscriber_total(), 2);
    }

    #[test]
    fn invalid_email_changes_nothing() {
        let store = MemoryStore::new();
        let handle = store.clone();
        let mut ledger = SubscriptionLedger::initialize(store);

        assert_eq!(ledger.submit("not-an-email"), SubmitOutcome::InvalidEmail);
        assert_eq!(ledger.subscriber_total(), 0);
        assert_eq!(ledger.displayed_count(), SEED_COUNT);
        assert_eq!(handle.get(SUBSCRIBERS_KEY), Ok(None));
    }

    #[test]
    fn startup_reconciles_counter_drift() {
        // Counter write lost after three list writes: floor repairs it.
        let store = MemoryStore::new();
        store
            .set(
                SUBSCRIBERS_KEY,
                r#"["a@b.com","c@d.com","e@f.com"]"#,
            )
            .unwrap();
        store.set(COUNTER_KEY, "1200").unwrap();
        let ledger = SubscriptionLedger::initialize(store);
        assert_eq!(ledger.displayed_count(), SEED_COUNT + 3);

        // A counter that ran ahead is left alone.
        let store = MemoryStore::new();
        store.set(COUNTER_KEY, "2000").unwrap();
        let ledger = SubscriptionLedger::initialize(store);
        assert_eq!(ledger.displayed_count(), 2000);
    }

    #[test]
    fn corrupt_list_is_treated_as_empty() {
        let store = MemoryStore::new();
        store.set(SUBSCRIBERS_KEY, "{not json").unwrap();
        let ledger = SubscriptionLedger::initialize(store);
        assert_eq!(ledger.subscriber_total(), 0);
        assert_eq!(ledger.displayed_count(), SEED_COUNT);
    }

    #[test]
    fn storage_failure_keeps_session_state_consistent() {
        let mut ledger = SubscriptionLedger::initialize(MemoryStore::unavailable());

        let outcome = ledger.submit("a@b.com");
        assert_eq!(
            outcome,
            SubmitOutcome::Subscribed {
                displayed_count: SEED_COUNT + 1,
                persisted: false,
            }
        );
        // Duplicate detection still works against the in-memory list.
        assert_eq!(ledger.submit("a@b.com"), SubmitOutcome::AlreadySubscribed);
    }
}
