//! Platform storage for the waitlist flag.
//!
//! Re-exports the storage trait from `rustysearch_core` and provides the
//! platform-specific implementations:
//!
//! - **Web (WASM)**: [`LocalStorageStore`] over `window.localStorage`
//! - **Desktop**: [`NativeStore`], one file per key in the platform data directory
//!
//! [`create_platform_store`] picks the right one and falls back to an
//! in-memory store when the platform storage cannot be opened, so the page
//! still works (the flag just won't survive a reload).

pub use rustysearch_core::storage::KeyValueStore;

use dioxus::logger::tracing::warn;
use rustysearch_core::error::StorageError;
use rustysearch_core::storage::InMemoryStore;

#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

#[cfg(not(target_arch = "wasm32"))]
pub use native::NativeStore;

/// Boxed store handed to the waitlist controller.
pub type PlatformStore = Box<dyn KeyValueStore>;

/// Opens the platform storage backend.
#[cfg(target_arch = "wasm32")]
pub fn create_platform_store() -> PlatformStore {
    boxed_or_in_memory(LocalStorageStore::open())
}

/// Opens the platform storage backend.
#[cfg(not(target_arch = "wasm32"))]
pub fn create_platform_store() -> PlatformStore {
    boxed_or_in_memory(NativeStore::new())
}

fn boxed_or_in_memory<S>(opened: Result<S, StorageError>) -> PlatformStore
where
    S: KeyValueStore + 'static,
{
    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(
                "Platform storage unavailable, waitlist flag will not persist: {}",
                e
            );
            Box::new(InMemoryStore::new())
        }
    }
}
