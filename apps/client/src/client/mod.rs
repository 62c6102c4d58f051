//! Content generation client: the single entry point for all generation
//! calls.
//!
//! Flow: credential gate → pacing gate → dispatch → response validation →
//! retry on rate limit with exponential backoff → recovery policy.
//!
//! ARCHITECTURAL RULE: no other module talks to the generation service
//! directly. All remote calls go through `ContentClient`.

pub mod credentials;
mod gemini;
pub mod protocol;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::GenerateError;
use crate::mock::MockGenerator;
use crate::pacing::RateLimiter;
use crate::status::{NullObserver, StatusObserver, StatusUpdate};

pub use gemini::GeminiBackend;

/// Max additional attempts after a rate-limit response.
const MAX_RETRIES: u32 = 2;
/// First backoff delay; doubles per retry.
const BASE_DELAY: Duration = Duration::from_millis(3000);
/// Backoff ceiling.
const MAX_DELAY: Duration = Duration::from_millis(10_000);

/// How remote failures reach the caller.
///
/// Chosen once at construction and applied uniformly to every remote failure
/// class, never mixed per error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryPolicy {
    /// Mask every remote failure with demo output. `generate` only fails on
    /// a blank prompt. This is the crate's documented default contract.
    #[default]
    Resilient,
    /// Surface every remote failure as a typed error whose message names the
    /// likely cause and a remediation step.
    Strict,
}

/// A remote text-generation service. The one seam the retry loop depends on,
/// so orchestration is testable against scripted backends.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Client that turns prompts into generated text, masking transient remote
/// failures per the configured [`RecoveryPolicy`].
pub struct ContentClient {
    backend: Arc<dyn GenerationBackend>,
    mock: MockGenerator,
    limiter: Arc<RateLimiter>,
    api_key: Option<String>,
    policy: RecoveryPolicy,
}

impl ContentClient {
    /// Builds a client against the live service with the default resilient
    /// policy. The limiter is shared so every client paces against the same
    /// gate.
    pub fn new(api_key: Option<String>, limiter: Arc<RateLimiter>) -> Self {
        Self::with_policy(api_key, limiter, RecoveryPolicy::default())
    }

    pub fn with_policy(
        api_key: Option<String>,
        limiter: Arc<RateLimiter>,
        policy: RecoveryPolicy,
    ) -> Self {
        let backend = Arc::new(GeminiBackend::new(api_key.clone().unwrap_or_default()));
        Self::with_backend(backend, api_key, limiter, policy)
    }

    /// Swaps the remote transport. Used by tests and offline tooling.
    pub fn with_backend(
        backend: Arc<dyn GenerationBackend>,
        api_key: Option<String>,
        limiter: Arc<RateLimiter>,
        policy: RecoveryPolicy,
    ) -> Self {
        Self {
            backend,
            mock: MockGenerator::new(),
            limiter,
            api_key,
            policy,
        }
    }

    /// Reports the configured key's syntactic status, for settings surfaces.
    pub fn key_status(&self) -> credentials::KeyStatus {
        credentials::key_status(self.api_key.as_deref())
    }

    /// Generates text for `prompt` without progress reporting.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.generate_with_status(prompt, &NullObserver).await
    }

    /// Generates text for `prompt`, reporting waits and fallbacks to
    /// `observer`.
    ///
    /// Always settles: attempts are bounded by the retry limit and each
    /// carries its own network timeout. Output is either a full remote
    /// candidate or a full mock response, never partial.
    pub async fn generate_with_status(
        &self,
        prompt: &str,
        observer: &dyn StatusObserver,
    ) -> Result<String, GenerateError> {
        if prompt.trim().is_empty() {
            return Err(GenerateError::EmptyPrompt);
        }

        // Credential gate: demo mode is a designed fallback, not an error.
        let key = credentials::key_status(self.api_key.as_deref());
        if !key.valid {
            debug!("{} - serving demo output", key.message);
            observer.notify(StatusUpdate::DemoMode {
                reason: key.message,
            });
            return Ok(self.mock.generate(prompt).await);
        }

        match self.request_with_retry(prompt, observer).await {
            Ok(text) => Ok(text),
            Err(err) => self.recover(err, prompt, observer).await,
        }
    }

    /// Dispatch loop: pacing gate before every attempt, exponential backoff
    /// on rate limits up to `MAX_RETRIES`. Every other failure class is
    /// terminal for the call.
    async fn request_with_retry(
        &self,
        prompt: &str,
        observer: &dyn StatusObserver,
    ) -> Result<String, GenerateError> {
        let mut attempt: u32 = 0;

        loop {
            let waited = self.limiter.wait_for_slot().await;
            if !waited.is_zero() {
                debug!("pacing gate held request for {}ms", waited.as_millis());
            }

            match self.backend.generate(prompt).await {
                Ok(text) => return Ok(text),
                Err(GenerateError::RateLimited) if attempt < MAX_RETRIES => {
                    let delay = backoff_delay(attempt);
                    attempt += 1;
                    warn!(
                        "rate limited; retry {attempt}/{MAX_RETRIES} after {}ms",
                        delay.as_millis()
                    );
                    observer.notify(StatusUpdate::RetryScheduled {
                        attempt,
                        max_retries: MAX_RETRIES,
                        delay,
                    });
                    tokio::time::sleep(delay).await;
                }
                Err(GenerateError::RateLimited) => {
                    return Err(GenerateError::RateLimitExceeded {
                        retries: MAX_RETRIES,
                    });
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// The single policy decision point. Every remote failure lands here.
    async fn recover(
        &self,
        err: GenerateError,
        prompt: &str,
        observer: &dyn StatusObserver,
    ) -> Result<String, GenerateError> {
        match self.policy {
            RecoveryPolicy::Resilient => {
                warn!("generation failed ({err}); falling back to demo output");
                observer.notify(StatusUpdate::DemoFallback {
                    cause: err.to_string(),
                });
                Ok(self.mock.generate(prompt).await)
            }
            RecoveryPolicy::Strict => Err(err),
        }
    }
}

/// `min(BASE_DELAY * 2^attempt, MAX_DELAY)`
fn backoff_delay(attempt: u32) -> Duration {
    MAX_DELAY.min(BASE_DELAY * 2u32.pow(attempt))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use tokio::time::Instant;

    use super::*;
    use crate::mock::{classify, Template};
    use crate::status::ChannelObserver;

    fn well_formed_key() -> Option<String> {
        Some(format!("AIza{}", "x".repeat(35)))
    }

    fn limiter() -> Arc<RateLimiter> {
        Arc::new(RateLimiter::new(Duration::from_millis(2000)))
    }

    /// Backend that replays a script of responses and records dispatch times.
    /// Once the script runs dry it keeps answering with a rate limit.
    struct ScriptedBackend {
        script: Mutex<VecDeque<Result<String, GenerateError>>>,
        dispatches: Mutex<Vec<Instant>>,
    }

    impl ScriptedBackend {
        fn new(script: Vec<Result<String, GenerateError>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                dispatches: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.dispatches.lock().unwrap().len()
        }

        fn dispatch_times(&self) -> Vec<Instant> {
            self.dispatches.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerationBackend for ScriptedBackend {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            self.dispatches.lock().unwrap().push(Instant::now());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GenerateError::RateLimited))
        }
    }

    fn client(
        backend: Arc<ScriptedBackend>,
        api_key: Option<String>,
        policy: RecoveryPolicy,
    ) -> ContentClient {
        ContentClient::with_backend(backend, api_key, limiter(), policy)
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_key_serves_mock_without_network() {
        let backend = ScriptedBackend::new(vec![Ok("remote".to_string())]);
        let client = client(Arc::clone(&backend), None, RecoveryPolicy::Resilient);

        let text = client
            .generate("Generate code for a Fibonacci function in Python")
            .await
            .unwrap();

        assert_eq!(backend.calls(), 0, "demo mode must never touch the network");
        assert!(text.contains("```"), "mock code response must carry a fenced block");
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_key_serves_mock_without_network() {
        let backend = ScriptedBackend::new(vec![Ok("remote".to_string())]);
        let client = client(
            Arc::clone(&backend),
            Some("not-a-key".to_string()),
            RecoveryPolicy::Strict,
        );

        let text = client.generate("explain this loop").await.unwrap();

        assert_eq!(backend.calls(), 0);
        assert_eq!(text, Template::Explanation.body());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remote_success_passes_text_through() {
        let backend = ScriptedBackend::new(vec![Ok("full remote response".to_string())]);
        let client = client(Arc::clone(&backend), well_formed_key(), RecoveryPolicy::Strict);

        let text = client.generate("explain this loop").await.unwrap();

        assert_eq!(text, "full remote response");
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limits_are_retried_until_success() {
        let backend = ScriptedBackend::new(vec![
            Err(GenerateError::RateLimited),
            Err(GenerateError::RateLimited),
            Ok("finally".to_string()),
        ]);
        let client = client(Arc::clone(&backend), well_formed_key(), RecoveryPolicy::Strict);

        let (observer, mut updates) = ChannelObserver::new();
        let text = client
            .generate_with_status("explain this loop", &observer)
            .await
            .unwrap();

        assert_eq!(text, "finally");
        assert_eq!(backend.calls(), 3);

        // Backoff doubles: 3s then 6s.
        assert_eq!(
            updates.recv().await.unwrap(),
            StatusUpdate::RetryScheduled {
                attempt: 1,
                max_retries: 2,
                delay: Duration::from_millis(3000),
            }
        );
        assert_eq!(
            updates.recv().await.unwrap(),
            StatusUpdate::RetryScheduled {
                attempt: 2,
                max_retries: 2,
                delay: Duration::from_millis(6000),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_resilient_exhaustion_falls_back_to_mock() {
        // Empty script: every dispatch answers 429.
        let backend = ScriptedBackend::new(vec![]);
        let client = client(
            Arc::clone(&backend),
            well_formed_key(),
            RecoveryPolicy::Resilient,
        );

        let text = client.generate("write a haiku about rust").await.unwrap();

        assert_eq!(backend.calls(), 3, "initial attempt plus two retries");
        assert_eq!(text, Template::Generic.body());
    }

    #[tokio::test(start_paused = true)]
    async fn test_strict_exhaustion_surfaces_rate_limit_exceeded() {
        let backend = ScriptedBackend::new(vec![]);
        let client = client(Arc::clone(&backend), well_formed_key(), RecoveryPolicy::Strict);

        let err = client.generate("write a haiku about rust").await.unwrap_err();

        assert!(matches!(
            err,
            GenerateError::RateLimitExceeded { retries: 2 }
        ));
        assert!(err.to_string().to_lowercase().contains("wait"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_candidate_is_never_retried() {
        let backend = ScriptedBackend::new(vec![Err(GenerateError::NoCandidate)]);
        let client = client(Arc::clone(&backend), well_formed_key(), RecoveryPolicy::Strict);

        let err = client.generate("explain this loop").await.unwrap_err();

        assert_eq!(backend.calls(), 1, "empty candidates must not retry");
        assert!(matches!(err, GenerateError::NoCandidate));
        assert!(err.to_string().starts_with("No response generated."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_policy_applies_uniformly_across_failure_classes() {
        for failure in [
            GenerateError::Network("connection reset".to_string()),
            GenerateError::Timeout,
            GenerateError::AccessForbidden,
            GenerateError::NoCandidate,
        ] {
            let backend = ScriptedBackend::new(vec![Err(failure.clone())]);
            let resilient = client(
                Arc::clone(&backend),
                well_formed_key(),
                RecoveryPolicy::Resilient,
            );
            let text = resilient.generate("convert this to python").await.unwrap();
            assert_eq!(text, Template::Conversion.body());

            let backend = ScriptedBackend::new(vec![Err(failure.clone())]);
            let strict = client(Arc::clone(&backend), well_formed_key(), RecoveryPolicy::Strict);
            assert!(strict.generate("convert this to python").await.is_err());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_to_back_calls_respect_pacing_gate() {
        let backend = ScriptedBackend::new(vec![
            Ok("first".to_string()),
            Ok("second".to_string()),
        ]);
        let client = client(Arc::clone(&backend), well_formed_key(), RecoveryPolicy::Strict);

        client.generate("explain this loop").await.unwrap();
        client.generate("explain this loop").await.unwrap();

        let times = backend.dispatch_times();
        assert_eq!(times.len(), 2);
        assert!(times[1] - times[0] >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_dispatches_also_respect_pacing_gate() {
        let backend = ScriptedBackend::new(vec![
            Err(GenerateError::RateLimited),
            Err(GenerateError::RateLimited),
            Ok("done".to_string()),
        ]);
        let client = client(Arc::clone(&backend), well_formed_key(), RecoveryPolicy::Strict);

        client.generate("explain this loop").await.unwrap();

        let times = backend.dispatch_times();
        assert_eq!(times.len(), 3);
        for pair in times.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(2000));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_prompt_is_rejected_under_both_policies() {
        for policy in [RecoveryPolicy::Resilient, RecoveryPolicy::Strict] {
            let backend = ScriptedBackend::new(vec![]);
            let client = client(Arc::clone(&backend), well_formed_key(), policy);
            let err = client.generate("   ").await.unwrap_err();
            assert!(matches!(err, GenerateError::EmptyPrompt));
            assert_eq!(backend.calls(), 0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_fallback_routes_by_prompt_keywords() {
        let backend = ScriptedBackend::new(vec![Err(GenerateError::Timeout)]);
        let client = client(
            Arc::clone(&backend),
            well_formed_key(),
            RecoveryPolicy::Resilient,
        );

        let prompt = "Please analyze and help debug the following code to detect the bug";
        let text = client.generate(prompt).await.unwrap();

        assert_eq!(classify(prompt), Template::BugReport);
        assert_eq!(text, Template::BugReport.body());
    }

    #[test]
    fn test_backoff_delay_is_capped() {
        assert_eq!(backoff_delay(0), Duration::from_millis(3000));
        assert_eq!(backoff_delay(1), Duration::from_millis(6000));
        assert_eq!(backoff_delay(2), Duration::from_millis(10_000));
        assert_eq!(backoff_delay(3), Duration::from_millis(10_000));
    }
}
