//! Optional analytics hook.
//!
//! The page reports one event, on waitlist submission. The hook is injected
//! by a third-party script and may be missing; sinks report whether they
//! dispatched and never fail.

use crate::config::{ANALYTICS_EVENT_CATEGORY, ANALYTICS_EVENT_NAME};

/// An analytics event in `gtag('event', name, { event_category, event_label })` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub category: String,
    pub label: String,
}

impl AnalyticsEvent {
    /// The waitlist sign-up event, labelled with the selected interest.
    pub fn waitlist_signup(interest: &str) -> Self {
        Self {
            name: ANALYTICS_EVENT_NAME.to_string(),
            category: ANALYTICS_EVENT_CATEGORY.to_string(),
            label: interest.to_string(),
        }
    }
}

/// Destination for analytics events.
pub trait AnalyticsSink {
    /// Sends `event`. Returns `false` when no hook is available.
    fn track(&self, event: &AnalyticsEvent) -> bool;
}

/// Sink used when no analytics hook is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAnalytics;

impl AnalyticsSink for NoAnalytics {
    fn track(&self, _event: &AnalyticsEvent) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waitlist_event_shape() {
        let event = AnalyticsEvent::waitlist_signup("team");
        assert_eq!(event.name, "waitlist_signup");
        assert_eq!(event.category, "engagement");
        assert_eq!(event.label, "team");
    }

    #[test]
    fn test_missing_hook_is_silent() {
        assert!(!NoAnalytics.track(&AnalyticsEvent::waitlist_signup("oss")));
    }
}
