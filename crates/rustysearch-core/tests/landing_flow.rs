//! End-to-end checks for a visitor session on the landing page.
//!
//! These tests exercise the public API the way the app does:
//! 1. Page load: restore the waitlist state from storage
//! 2. Demo: commit queries and inspect what would be rendered
//! 3. Sign-up: submit, wait out the simulated delay, reload

use std::cell::RefCell;
use std::time::Duration;

use rustysearch_core::analytics::{AnalyticsEvent, AnalyticsSink};
use rustysearch_core::bootstrap::restore_waitlist;
use rustysearch_core::config::{SUBMIT_LABEL, WAITLIST_STORAGE_KEY};
use rustysearch_core::delay::TokioDelay;
use rustysearch_core::demo::{search, DemoOutcome, DemoResults, KeywordBucket};
use rustysearch_core::storage::{InMemoryStore, KeyValueStore};
use rustysearch_core::waitlist::{WaitlistController, WaitlistPhase};

#[derive(Default)]
struct Recorder(RefCell<Vec<AnalyticsEvent>>);

impl AnalyticsSink for &Recorder {
    fn track(&self, event: &AnalyticsEvent) -> bool {
        self.0.borrow_mut().push(event.clone());
        true
    }
}

fn rendered_percents(query: &str) -> (KeywordBucket, Vec<u32>) {
    match search(query) {
        DemoOutcome::Rendered {
            bucket,
            results: DemoResults::Results(views),
        } => (bucket, views.iter().map(|v| v.relevance_percent).collect()),
        other => panic!("expected rendered results for {:?}, got {:?}", query, other),
    }
}

#[test]
fn test_demo_buckets_end_to_end() {
    use KeywordBucket::{Api, Authentication, Database, General};

    let cases = [
        ("How does login work?", Authentication, vec![92, 87, 83]),
        ("Database connection pooling", Database, vec![94, 85, 78]),
        ("list every API endpoint", Api, vec![91, 84, 79]),
        ("foobar", General, vec![75, 65, 60]),
    ];

    for (query, bucket, percents) in cases {
        assert_eq!(rendered_percents(query), (bucket, percents), "{}", query);
    }

    assert_eq!(search("    "), DemoOutcome::Ignored);
}

#[tokio::test(start_paused = true)]
async fn test_signup_then_reload() {
    let store = InMemoryStore::new();
    let recorder = Recorder::default();

    // First visit
    let state = restore_waitlist(&store, SUBMIT_LABEL).await;
    assert_eq!(state.phase(), WaitlistPhase::Idle);

    let controller = WaitlistController::new(state, &store, &recorder, TokioDelay);
    let start = tokio::time::Instant::now();
    let view = controller.submit("personal", |_| {}).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert!(view.success_visible);
    assert!(!view.form_visible);
    assert_eq!(view.button.label, SUBMIT_LABEL);
    assert_eq!(
        store.get(WAITLIST_STORAGE_KEY).await.unwrap().as_deref(),
        Some("true")
    );
    assert_eq!(
        recorder.0.borrow().as_slice(),
        &[AnalyticsEvent::waitlist_signup("personal")]
    );

    // Reload: success panel without any interaction
    let reloaded = restore_waitlist(&store, SUBMIT_LABEL).await.view();
    assert_eq!(reloaded.phase, WaitlistPhase::Completed);
    assert!(reloaded.success_visible);
    assert!(!reloaded.form_visible);
}
