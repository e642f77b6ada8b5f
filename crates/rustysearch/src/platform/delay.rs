use rustysearch_core::delay::Delay;
#[cfg(not(target_arch = "wasm32"))]
use rustysearch_core::delay::TokioDelay;
use std::time::Duration;

/// Browser timer delay (`setTimeout` under the hood).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformDelay;

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl Delay for PlatformDelay {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

/// Tokio timer delay; desktop runs inside the Dioxus tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformDelay(TokioDelay);

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl Delay for PlatformDelay {
    async fn sleep(&self, duration: Duration) {
        self.0.sleep(duration).await;
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_platform_delay_sleeps() {
        let start = tokio::time::Instant::now();
        PlatformDelay::default()
            .sleep(Duration::from_millis(1000))
            .await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
