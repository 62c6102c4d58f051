//! Progress notifications for in-flight generation calls.
//!
//! The retry loop reports what it is doing through a [`StatusObserver`]
//! instead of a UI callback, so callers decide how to present waits: log
//! them, poll a channel, or ignore them entirely.

use std::time::Duration;

use tokio::sync::mpsc;

/// A progress event emitted while a generation call is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdate {
    /// The credential gate routed this call to the local mock generator.
    DemoMode { reason: &'static str },
    /// A rate-limit response scheduled a retry after the given delay.
    RetryScheduled {
        attempt: u32,
        max_retries: u32,
        delay: Duration,
    },
    /// A remote failure was masked by falling back to the mock generator.
    DemoFallback { cause: String },
}

impl StatusUpdate {
    /// Human-readable rendering, safe to show directly to a user.
    pub fn message(&self) -> String {
        match self {
            StatusUpdate::DemoMode { reason } => (*reason).to_string(),
            StatusUpdate::RetryScheduled {
                attempt,
                max_retries,
                delay,
            } => format!(
                "Rate limited. Waiting {} seconds before retry {}/{}...",
                delay.as_secs(),
                attempt,
                max_retries
            ),
            StatusUpdate::DemoFallback { cause } => {
                format!("Falling back to demo output: {cause}")
            }
        }
    }
}

/// Receives status updates from the retry loop.
///
/// Implementations must return quickly and must not panic; they are invoked
/// inline between attempts.
pub trait StatusObserver: Send + Sync {
    fn notify(&self, update: StatusUpdate);
}

/// Observer that drops every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl StatusObserver for NullObserver {
    fn notify(&self, _update: StatusUpdate) {}
}

/// Observer that forwards updates into an unbounded channel for callers that
/// poll. Sending never blocks; updates after the receiver is dropped are
/// discarded.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<StatusUpdate>,
}

impl ChannelObserver {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StatusUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl StatusObserver for ChannelObserver {
    fn notify(&self, update: StatusUpdate) {
        let _ = self.tx.send(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_message_names_wait_and_attempt() {
        let update = StatusUpdate::RetryScheduled {
            attempt: 1,
            max_retries: 2,
            delay: Duration::from_secs(3),
        };
        assert_eq!(
            update.message(),
            "Rate limited. Waiting 3 seconds before retry 1/2..."
        );
    }

    #[tokio::test]
    async fn test_channel_observer_forwards_updates() {
        let (observer, mut rx) = ChannelObserver::new();

        observer.notify(StatusUpdate::DemoFallback {
            cause: "network error".to_string(),
        });

        let received = rx.recv().await.unwrap();
        assert_eq!(
            received,
            StatusUpdate::DemoFallback {
                cause: "network error".to_string()
            }
        );
    }

    #[test]
    fn test_notify_after_receiver_dropped_is_silent() {
        let (observer, rx) = ChannelObserver::new();
        drop(rx);
        observer.notify(StatusUpdate::DemoMode {
            reason: "No API key found - running in demo mode",
        });
    }
}
