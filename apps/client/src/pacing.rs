//! Request pacing: the minimum-interval gate in front of every outbound call.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Minimum spacing between outbound generation requests.
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(2000);

/// Process-wide pacing gate. Construct one at startup and share it between
/// every client that talks to the generation service.
///
/// The timestamp lock is held across the wait, so concurrent callers queue in
/// lock-acquisition order and no two dispatches land closer together than the
/// configured interval. The remote service's own rate limiting remains the
/// enforcement backstop.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_dispatch: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_dispatch: Mutex::new(None),
        }
    }

    /// Suspends until the minimum interval since the previous dispatch has
    /// elapsed, then stamps this dispatch. Returns the wait that was served.
    pub async fn wait_for_slot(&self) -> Duration {
        let mut last = self.last_dispatch.lock().await;

        let waited = match *last {
            Some(prev) => {
                let elapsed = prev.elapsed();
                if elapsed < self.min_interval {
                    let wait = self.min_interval - elapsed;
                    sleep(wait).await;
                    wait
                } else {
                    Duration::ZERO
                }
            }
            None => Duration::ZERO,
        };

        *last = Some(Instant::now());
        waited
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(MIN_REQUEST_INTERVAL)
    }
}
