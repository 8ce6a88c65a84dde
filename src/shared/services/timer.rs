use std::time::Duration;

use async_trait::async_trait;

/// Source of the cosmetic pauses, swappable so tests never wait
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// gloo-timers in the browser, tokio natively
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformTimer;

#[async_trait(?Send)]
impl Timer for PlatformTimer {
    async fn sleep(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }

        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;

        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_duration_returns_immediately() {
        let started = std::time::Instant::now();
        PlatformTimer.sleep(Duration::ZERO).await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_sleep_waits() {
        let started = std::time::Instant::now();
        PlatformTimer.sleep(Duration::from_millis(20)).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
