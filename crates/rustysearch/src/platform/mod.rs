//! Platform-specific glue for the landing page.
//!
//! The core crate defines the seams ([`Delay`](rustysearch_core::delay::Delay),
//! [`AnalyticsSink`](rustysearch_core::analytics::AnalyticsSink)); this module
//! fills them per target:
//!
//! | Concern   | Web (WASM)                     | Desktop                    |
//! |-----------|--------------------------------|----------------------------|
//! | Delay     | `gloo_timers::TimeoutFuture`   | `tokio::time::sleep`       |
//! | Analytics | `window.gtag`, if present      | `tracing` log line         |
//! | Scrolling | `window.scrollTo` via web-sys  | `document::eval` snippet   |

mod analytics;
mod delay;
mod scroll;

pub use analytics::PlatformAnalytics;
pub use delay::PlatformDelay;
pub use scroll::smooth_scroll_to;

use rustysearch_core::waitlist::{WaitlistController, WaitlistState};

use crate::storage::PlatformStore;

/// Waitlist controller wired to this platform's collaborators.
pub type SiteWaitlist = WaitlistController<PlatformStore, PlatformAnalytics, PlatformDelay>;

/// Builds the waitlist controller around `state` and `store`.
pub fn create_waitlist(state: WaitlistState, store: PlatformStore) -> SiteWaitlist {
    WaitlistController::new(state, store, PlatformAnalytics, PlatformDelay::default())
}
