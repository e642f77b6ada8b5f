//! `window.localStorage` store for the web platform.

use rustysearch_core::error::StorageError;
use rustysearch_core::storage::KeyValueStore;
use wasm_bindgen::JsValue;

/// Key-value store over the browser's `localStorage`.
///
/// Values survive reloads and are scoped to the page's origin.
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Opens `window.localStorage`.
    ///
    /// Fails when there is no window (worker context) or the browser blocks
    /// storage access (some private modes, sandboxed iframes).
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::BrowserApiUnavailable)?;
        let storage = window
            .local_storage()
            .map_err(|_| StorageError::BrowserApiUnavailable)?
            .ok_or(StorageError::BrowserApiUnavailable)?;

        Ok(Self { storage })
    }
}

fn js_error(op: &str, err: JsValue) -> StorageError {
    StorageError::Io(format!("localStorage {} failed: {:?}", op, err))
}

#[async_trait::async_trait(?Send)]
impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| js_error("read", e))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Throws QuotaExceededError when the origin is out of space
        self.storage
            .set_item(key, value)
            .map_err(|e| js_error("write", e))
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| js_error("delete", e))
    }
}
