//! Key-value persistence seam shared by the preference controllers and the
//! subscription ledger.
//!
//! All persisted state (theme, locale, subscriber list, displayed counter)
//! goes through [`KeyValueStore`]. The browser build talks to
//! `window.localStorage`; native builds and tests use [`MemoryStore`], which
//! can also simulate an unavailable backend so degradation paths stay
//! testable.
//!
//! Storage failure is never fatal: callers downgrade to "not remembered this
//! session" and keep their in-memory state authoritative.

use std::fmt;

/// Why a read or write did not reach the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// The store cannot be reached at all (storage disabled, no window).
    Unavailable,
    /// The store exists but rejected the write (quota, security).
    WriteRejected,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "persistent storage unavailable"),
            StorageError::WriteRejected => write!(f, "persistent storage rejected the write"),
        }
    }
}

/// Minimal string-keyed store. One value per key, last write wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for native builds and unit tests.
///
/// Cloning shares the underlying map, so a test can keep a handle while the
/// controller owns its own copy.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: std::rc::Rc<std::cell::RefCell<std::collections::BTreeMap<String, String>>>,
    available: std::rc::Rc<std::cell::Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Default::default(),
            available: std::rc::Rc::new(std::cell::Cell::new(true)),
        }
    }

    /// A store that fails every operation, for exercising degradation paths.
    pub fn unavailable() -> Self {
        let store = Self::new();
        store.available.set(false);
        store
    }

    /// Flip availability mid-test (e.g. quota exhausted after startup).
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available.get() {
            return Err(StorageError::Unavailable);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `localStorage`-backed store for the web build.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn backend(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let backend = self.backend()?;
        backend.get_item(key).map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let backend = self.backend()?;
        backend
            .set_item(key, value)
            .map_err(|_| StorageError::WriteRejected)
    }
}

/// The store the views reach for on each platform.
#[cfg(target_arch = "wasm32")]
pub type DefaultStore = BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultStore = MemoryStore;

/// Construct the platform store.
pub fn default_store() -> DefaultStore {
    DefaultStore::new()
}
