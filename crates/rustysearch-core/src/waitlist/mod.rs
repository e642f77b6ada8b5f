//! Waitlist sign-up flow.
//!
//! The form posts natively to the external list service; nothing here
//! observes that request. Locally the form runs a small state machine:
//!
//! ```text
//! Idle ──begin_submit──► Submitting ──(1000 ms)──► Completed
//! ```
//!
//! - **begin**: disable the button, show "Submitting...", fire the analytics event
//! - **complete**: persist the flag, hide the form, show the success panel,
//!   restore the button
//!
//! Success is shown after the delay whatever the list service answered.

mod state;

pub use state::{SubmitButton, SubmitTicket, WaitlistPhase, WaitlistState, WaitlistView};

use std::cell::RefCell;

use tracing::{debug, info, instrument, warn};

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::delay::Delay;
use crate::error::WaitlistError;
use crate::storage::{KeyValueStore, WaitlistFlag};

/// Drives [`WaitlistState`] with persistence, analytics and the simulated delay.
///
/// Collaborators are passed in, so tests can swap in an in-memory store, a
/// recording analytics sink and a paused clock.
pub struct WaitlistController<S, A, D> {
    state: RefCell<WaitlistState>,
    store: S,
    analytics: A,
    delay: D,
}

impl<S, A, D> WaitlistController<S, A, D>
where
    S: KeyValueStore,
    A: AnalyticsSink,
    D: Delay,
{
    pub fn new(state: WaitlistState, store: S, analytics: A, delay: D) -> Self {
        Self {
            state: RefCell::new(state),
            store,
            analytics,
            delay,
        }
    }

    pub fn view(&self) -> WaitlistView {
        self.state.borrow().view()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Starts a submission and reports it to analytics.
    pub fn begin_submit(&self, interest: &str) -> Result<SubmitTicket, WaitlistError> {
        let ticket = self.state.borrow_mut().begin_submit()?;
        info!("📨 Waitlist submission started");

        let event = AnalyticsEvent::waitlist_signup(interest);
        if !self.analytics.track(&event) {
            debug!("Analytics hook not present, skipped {}", event.name);
        }

        Ok(ticket)
    }

    /// Finishes a submission. A failed flag write is logged, not returned:
    /// the visitor still sees success for this session.
    pub async fn complete_submit(
        &self,
        ticket: SubmitTicket,
    ) -> Result<WaitlistView, WaitlistError> {
        self.state.borrow_mut().complete(ticket)?;

        if let Err(e) = WaitlistFlag::new(&self.store).set().await {
            warn!("Failed to persist waitlist flag: {}", e);
        }

        info!("✅ Waitlist submission completed");
        Ok(self.view())
    }

    /// Full submission: begin, wait the fixed delay, complete.
    ///
    /// `on_change` sees the view after each transition.
    #[instrument(skip(self, on_change))]
    pub async fn submit<F>(
        &self,
        interest: &str,
        mut on_change: F,
    ) -> Result<WaitlistView, WaitlistError>
    where
        F: FnMut(&WaitlistView),
    {
        let ticket = self.begin_submit(interest)?;
        on_change(&self.view());

        self.delay.sleep(ticket.delay()).await;

        let view = self.complete_submit(ticket).await?;
        on_change(&view);
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::NoAnalytics;
    use crate::delay::TokioDelay;
    use crate::storage::InMemoryStore;
    use crate::test_utils::{FailingStore, RecordingAnalytics};
    use std::time::Duration;

    fn controller<S: KeyValueStore>(
        store: S,
    ) -> WaitlistController<S, RecordingAnalytics, TokioDelay> {
        WaitlistController::new(
            WaitlistState::idle("Join"),
            store,
            RecordingAnalytics::default(),
            TokioDelay,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_completes_after_delay() {
        let controller = controller(InMemoryStore::new());
        let start = tokio::time::Instant::now();

        let mut seen = Vec::new();
        let view = controller
            .submit("team", |v| seen.push(v.clone()))
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].phase, WaitlistPhase::Submitting);
        assert!(seen[0].button.disabled);
        assert_eq!(seen[0].button.label, "Submitting...");

        assert_eq!(view.phase, WaitlistPhase::Completed);
        assert!(!view.form_visible);
        assert!(view.success_visible);
        assert_eq!(view.button.label, "Join");
        assert!(!view.button.disabled);

        let flag = WaitlistFlag::new(controller.store());
        assert!(flag.is_set().await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_persisted_before_delay() {
        let controller = controller(InMemoryStore::new());

        let pending = controller.submit("oss", |_| {});
        tokio::pin!(pending);

        // Poll once past the first transition, then stop short of the delay
        tokio::select! {
            _ = &mut pending => panic!("completed before the delay"),
            _ = tokio::time::sleep(Duration::from_millis(999)) => {}
        }
        assert_eq!(controller.view().phase, WaitlistPhase::Submitting);
        let flag = WaitlistFlag::new(controller.store());
        assert!(!flag.is_set().await.unwrap());

        let view = pending.await.unwrap();
        assert_eq!(view.phase, WaitlistPhase::Completed);
    }

    #[tokio::test]
    async fn test_analytics_event_carries_interest() {
        let controller = controller(InMemoryStore::new());
        let ticket = controller.begin_submit("enterprise").unwrap();

        let events = controller.analytics.events();
        assert_eq!(events, vec![AnalyticsEvent::waitlist_signup("enterprise")]);

        controller.complete_submit(ticket).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_analytics_hook_tolerated() {
        let controller = WaitlistController::new(
            WaitlistState::idle("Join"),
            InMemoryStore::new(),
            NoAnalytics,
            TokioDelay,
        );
        let ticket = controller.begin_submit("team").unwrap();
        let view = controller.complete_submit(ticket).await.unwrap();
        assert!(view.success_visible);
    }

    #[tokio::test]
    async fn test_storage_failure_still_shows_success() {
        let controller = controller(FailingStore);
        let ticket = controller.begin_submit("team").unwrap();
        let view = controller.complete_submit(ticket).await.unwrap();

        assert_eq!(view.phase, WaitlistPhase::Completed);
        assert!(view.success_visible);
    }

    #[tokio::test]
    async fn test_submit_rejected_when_completed() {
        let controller = WaitlistController::new(
            WaitlistState::completed("Join"),
            InMemoryStore::new(),
            RecordingAnalytics::default(),
            TokioDelay,
        );

        let err = controller.submit("team", |_| {}).await.unwrap_err();
        assert!(matches!(err, WaitlistError::InvalidTransition { .. }));
        assert!(controller.analytics.events().is_empty());
    }
}
