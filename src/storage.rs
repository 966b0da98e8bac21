//! Persisted preference storage.
//!
//! The theme controller reads and writes a single key through the
//! [`PreferenceStore`] trait so the browser's local storage can be swapped
//! for an in-memory map in tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Key-value store for the persisted theme preference.
///
/// Failures are swallowed: a preference that cannot be read behaves as
/// absent, and a write that fails is dropped. The caller falls back to
/// defaults either way.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// In-memory store for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a value, simulating a preference left by an earlier visit.
    #[must_use]
    pub fn seed(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

#[cfg(feature = "web")]
pub use local::LocalStore;

#[cfg(feature = "web")]
mod local {
    use super::PreferenceStore;

    /// Store backed by `window.localStorage`.
    ///
    /// Local storage can be absent (sandboxed frames, privacy settings);
    /// every access is guarded and degrades to a no-op.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalStore;

    impl LocalStore {
        #[must_use]
        pub fn new() -> Self {
            Self
        }

        fn storage() -> Option<web_sys::Storage> {
            web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        }
    }

    impl PreferenceStore for LocalStore {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage().and_then(|s| s.get_item(key).ok().flatten())
        }

        fn set(&self, key: &str, value: &str) {
            if let Some(storage) = Self::storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
}
