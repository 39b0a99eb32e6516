//! Minimum spacing between API requests

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant, sleep_until};

/// Default spacing between two API calls
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Keeps API calls at least `delay` apart.
///
/// Call [`RequestPacer::wait`] right before sending a request. The first call
/// returns immediately, later calls sleep until `delay` has passed since the
/// previous one started.
#[derive(Debug)]
pub struct RequestPacer {
    delay: Duration,
    last: Mutex<Option<Instant>>,
}

impl RequestPacer {
    /// Create a pacer with the given spacing (zero disables pacing)
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last: Mutex::new(None),
        }
    }

    /// Configured spacing
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait for the next request slot
    pub async fn wait(&self) {
        let mut last = self.last.lock().await;
        if let Some(previous) = *last {
            let ready = previous + self.delay;
            if ready > Instant::now() {
                tracing::trace!(delay = ?self.delay, "pacing request");
                sleep_until(ready).await;
            }
        }
        *last = Some(Instant::now());
    }
}

impl Default for RequestPacer {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_request_is_immediate() {
        let pacer = RequestPacer::new(Duration::from_secs(1));
        let start = Instant::now();
        pacer.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_requests_are_spaced() {
        let pacer = RequestPacer::new(Duration::from_secs(1));
        let start = Instant::now();
        for _ in 0..3 {
            pacer.wait().await;
        }
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_requests_are_not_delayed_further() {
        let pacer = RequestPacer::new(Duration::from_secs(1));
        pacer.wait().await;
        tokio::time::sleep(Duration::from_secs(5)).await;
        let start = Instant::now();
        pacer.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
