//! Site configuration.
//!
//! Fixed behaviour of the landing page lives in constants; the parts that
//! depend on the deployment (the external list service endpoint and the
//! interest options offered in the form) live in [`SiteConfig`], which the
//! app loads from an embedded JSON file.
//!
//! # Usage
//!
//! ```
//! use rustysearch_core::config::{SiteConfig, SUBMIT_DELAY_MS};
//!
//! let config = SiteConfig::from_json(r#"{ "form_action": "https://example.com/subscribe" }"#)
//!     .unwrap();
//! assert_eq!(config.form_action, "https://example.com/subscribe");
//! assert_eq!(SUBMIT_DELAY_MS, 1000);
//! ```

use serde::Deserialize;

use crate::error::ConfigError;

// =============================================================================
// Waitlist
// =============================================================================

/// Storage key for the "already joined the waitlist" flag.
pub const WAITLIST_STORAGE_KEY: &str = "rustysearch_waitlist";

/// The only value ever written under [`WAITLIST_STORAGE_KEY`].
pub const WAITLIST_FLAG_VALUE: &str = "true";

/// Simulated submission latency before the success panel is shown.
///
/// Not tied to the external request; the success state appears after this
/// delay whatever the list service answered.
pub const SUBMIT_DELAY_MS: u64 = 1000;

/// Submit button label while a submission is pending.
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Submit button label at rest.
pub const SUBMIT_LABEL: &str = "Join the Waitlist";

// =============================================================================
// Analytics
// =============================================================================

/// Event name sent to the analytics hook on submission.
pub const ANALYTICS_EVENT_NAME: &str = "waitlist_signup";

/// Event category sent alongside [`ANALYTICS_EVENT_NAME`].
pub const ANALYTICS_EVENT_CATEGORY: &str = "engagement";

// =============================================================================
// Page layout
// =============================================================================

/// Height of the fixed header, subtracted from anchor scroll targets.
pub const SCROLL_HEADER_OFFSET_PX: f64 = 100.0;

/// Deployment-specific settings for the waitlist form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// URL the form posts to (owned by the external list service)
    pub form_action: String,
    /// Browsing context for the native submission
    pub form_target: String,
    /// Name of the list service's bot-trap input, if it uses one
    pub honeypot_field: Option<String>,
    /// `(value, label)` pairs offered in the interest selector
    pub interests: Vec<InterestOption>,
}

/// One entry of the interest selector.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InterestOption {
    pub value: String,
    pub label: String,
}

impl InterestOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_action: "https://rustysearch.us21.list-manage.com/subscribe/post".to_string(),
            form_target: "_blank".to_string(),
            honeypot_field: None,
            interests: vec![
                InterestOption::new("personal", "Personal projects"),
                InterestOption::new("team", "Team / company codebase"),
                InterestOption::new("enterprise", "Enterprise deployment"),
                InterestOption::new("oss", "Open source maintenance"),
            ],
        }
    }
}

impl SiteConfig {
    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configs the form cannot be rendered with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.form_action.trim().is_empty() {
            return Err(ConfigError::Invalid("form_action must not be empty".into()));
        }
        if self.interests.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one interest option is required".into(),
            ));
        }
        Ok(())
    }

    /// Value preselected in the interest selector.
    pub fn default_interest(&self) -> &str {
        self.interests
            .first()
            .map(|opt| opt.value.as_str())
            .unwrap_or_default()
    }
}
