//! Error types for rustysearch-core.
//!
//! The demo search has no failure modes, so every error here belongs to the
//! waitlist flow or the configuration layer.

use thiserror::Error;

use crate::waitlist::WaitlistPhase;

/// Errors that can occur while reading or writing the persisted flag.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    /// Filesystem or browser storage I/O failed
    #[error("IO error: {0}")]
    Io(String),
    /// `window.localStorage` is missing or blocked (private mode, sandboxed iframe)
    #[error("Browser storage API unavailable")]
    BrowserApiUnavailable,
}

/// Errors raised by the waitlist state machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WaitlistError {
    /// Operation is not valid in the controller's current phase
    #[error("Cannot {action} while waitlist is {phase:?}")]
    InvalidTransition {
        action: &'static str,
        phase: WaitlistPhase,
    },
}

/// Errors that can occur while loading the site configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// JSON could not be parsed
    #[error("Failed to parse site config: {0}")]
    Parse(String),
    /// Parsed config failed validation
    #[error("Invalid site config: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
