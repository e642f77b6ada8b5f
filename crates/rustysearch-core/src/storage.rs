//! Key-value persistence for the waitlist flag.
//!
//! The landing page persists exactly one thing: whether this visitor already
//! joined the waitlist. [`KeyValueStore`] is the seam the app plugs its
//! platform storage into:
//!
//! - **Web (WASM)**: `window.localStorage` (`LocalStorageStore` in the app crate)
//! - **Desktop**: one file per key in the platform data dir (`NativeStore` in the app crate)
//! - **Tests / ephemeral sessions**: [`InMemoryStore`]
//!
//! [`WaitlistFlag`] wraps a store with the flag's key and value semantics.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::warn;

use crate::config::{WAITLIST_FLAG_VALUE, WAITLIST_STORAGE_KEY};
use crate::error::StorageError;

/// String key-value storage abstraction.
///
/// Futures are `?Send`: every implementation runs on the UI thread.
#[async_trait::async_trait(?Send)]
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent.
    #[must_use = "Storage read failures should be handled"]
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    #[must_use = "Storage write failures should be handled"]
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    #[must_use = "Storage delete failures should be handled"]
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[async_trait::async_trait(?Send)]
impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key).await
    }
}

#[async_trait::async_trait(?Send)]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key).await
    }
}

/// Store that keeps values for the lifetime of the process only.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `key = value`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

#[async_trait::async_trait(?Send)]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The persisted "already joined the waitlist" flag.
///
/// Only the exact value `"true"` counts as set.
pub struct WaitlistFlag<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> WaitlistFlag<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Whether the flag is set.
    pub async fn is_set(&self) -> Result<bool, StorageError> {
        let value = self.store.get(WAITLIST_STORAGE_KEY).await?;
        Ok(value.as_deref() == Some(WAITLIST_FLAG_VALUE))
    }

    /// Like [`is_set`](Self::is_set), but a read failure counts as "not joined".
    pub async fn is_set_or_false(&self) -> bool {
        match self.is_set().await {
            Ok(set) => set,
            Err(e) => {
                warn!("Could not read waitlist flag, assuming not joined: {}", e);
                false
            }
        }
    }

    /// Records completion.
    pub async fn set(&self) -> Result<(), StorageError> {
        self.store
            .set(WAITLIST_STORAGE_KEY, WAITLIST_FLAG_VALUE)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FailingStore;

    #[tokio::test]
    async fn test_in_memory_roundtrip() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));

        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);

        // Removing twice is fine
        store.remove("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_flag_unset_by_default() {
        let store = InMemoryStore::new();
        assert!(!WaitlistFlag::new(&store).is_set().await.unwrap());
    }

    #[tokio::test]
    async fn test_flag_set_writes_exact_value() {
        let store = InMemoryStore::new();
        let flag = WaitlistFlag::new(&store);
        flag.set().await.unwrap();

        assert!(flag.is_set().await.unwrap());
        assert_eq!(
            store.get("rustysearch_waitlist").await.unwrap().as_deref(),
            Some("true")
        );

        store.remove(WAITLIST_STORAGE_KEY).await.unwrap();
        assert!(!flag.is_set().await.unwrap());
    }

    #[tokio::test]
    async fn test_flag_requires_exact_true() {
        for value in ["1", "TRUE", "yes", ""] {
            let store = InMemoryStore::with_entry(WAITLIST_STORAGE_KEY, value);
            assert!(
                !WaitlistFlag::new(&store).is_set().await.unwrap(),
                "{:?} should not count as joined",
                value
            );
        }
    }

    #[tokio::test]
    async fn test_read_failure_treated_as_unset() {
        let store = FailingStore;
        let flag = WaitlistFlag::new(&store);
        assert!(flag.is_set().await.is_err());
        assert!(!flag.is_set_or_false().await);
    }
}
