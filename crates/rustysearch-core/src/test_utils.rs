//! Test doubles shared by unit tests.
//!
//! Only compiled when running tests.

use std::cell::RefCell;

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Analytics sink that records every event it is given.
#[derive(Default)]
pub struct RecordingAnalytics {
    events: RefCell<Vec<AnalyticsEvent>>,
}

impl RecordingAnalytics {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn track(&self, event: &AnalyticsEvent) -> bool {
        self.events.borrow_mut().push(event.clone());
        true
    }
}

/// Store whose every operation fails, like `localStorage` in a locked-down iframe.
pub struct FailingStore;

#[async_trait::async_trait(?Send)]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::BrowserApiUnavailable)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::BrowserApiUnavailable)
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::BrowserApiUnavailable)
    }
}
