//! Page load behaviour: restoring a previous sign-up and in-page anchor scrolling.

use tracing::info;

use crate::config::SCROLL_HEADER_OFFSET_PX;
use crate::storage::{KeyValueStore, WaitlistFlag};
use crate::waitlist::WaitlistState;

/// Initial waitlist state for this page load.
///
/// A visitor who already joined starts in `Completed`, bypassing the state
/// machine. A storage read failure counts as "not joined".
pub async fn restore_waitlist<S>(store: &S, submit_label: &str) -> WaitlistState
where
    S: KeyValueStore + ?Sized,
{
    if WaitlistFlag::new(store).is_set_or_false().await {
        info!("Visitor already on the waitlist, showing success panel");
        WaitlistState::completed(submit_label)
    } else {
        WaitlistState::idle(submit_label)
    }
}

/// Element id an in-page link points at.
///
/// Returns `None` for links that are not in-page (`"/docs"`,
/// `"https://..."`) and for a bare `"#"`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position for an element whose top is at `offset_top`, leaving room
/// for the fixed header.
pub fn scroll_top_for(offset_top: f64) -> f64 {
    offset_top - SCROLL_HEADER_OFFSET_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WAITLIST_STORAGE_KEY;
    use crate::storage::InMemoryStore;
    use crate::test_utils::FailingStore;
    use crate::waitlist::WaitlistPhase;

    #[tokio::test]
    async fn test_restore_with_flag_shows_success() {
        let store = InMemoryStore::with_entry(WAITLIST_STORAGE_KEY, "true");
        let view = restore_waitlist(&store, "Join").await.view();

        assert_eq!(view.phase, WaitlistPhase::Completed);
        assert!(!view.form_visible);
        assert!(view.success_visible);
    }

    #[tokio::test]
    async fn test_restore_without_flag_is_idle() {
        let store = InMemoryStore::new();
        let view = restore_waitlist(&store, "Join").await.view();
        assert_eq!(view.phase, WaitlistPhase::Idle);
        assert!(view.form_visible);
    }

    #[tokio::test]
    async fn test_restore_read_failure_is_idle() {
        let state = restore_waitlist(&FailingStore, "Join").await;
        assert_eq!(state.phase(), WaitlistPhase::Idle);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#features"), Some("features"));
        assert_eq!(anchor_target("#demo"), Some("demo"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/pricing"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_top_for(1200.0), 1100.0);
        assert_eq!(scroll_top_for(40.0), -60.0);
    }
}
