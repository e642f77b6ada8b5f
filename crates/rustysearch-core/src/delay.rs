//! Deferred completion for the waitlist submission.
//!
//! The success panel appears after a fixed, simulated latency. Waiting goes
//! through [`Delay`] so the app can pick a platform timer and tests can drive
//! time by hand:
//!
//! - **Web**: `gloo_timers::future::TimeoutFuture` (`PlatformDelay` in the app crate)
//! - **Native**: [`TokioDelay`], which honours a paused tokio clock
//!   (`#[tokio::test(start_paused = true)]` + `tokio::time::advance`)

use std::time::Duration;

/// Async sleep abstraction.
#[async_trait::async_trait(?Send)]
pub trait Delay {
    /// Completes once `duration` has elapsed. Never cancelled.
    async fn sleep(&self, duration: Duration);
}

/// Delay backed by the tokio timer.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
