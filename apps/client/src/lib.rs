//! codecraft-client: resilient client for AI content generation.
//!
//! Turns a text prompt into generated text via the Gemini `generateContent`
//! API while masking transient remote failures: outbound requests are paced
//! through a shared [`RateLimiter`], rate-limit responses retry with
//! exponential backoff, and under the default resilient policy anything still
//! failing degrades to a local mock generator ("demo mode") so callers always
//! receive usable text. Without a configured `GEMINI_API_KEY` the client runs
//! entirely offline.

pub mod client;
pub mod config;
pub mod errors;
pub mod mock;
pub mod pacing;
pub mod prompts;
pub mod status;

pub use client::{ContentClient, GeminiBackend, GenerationBackend, RecoveryPolicy};
pub use config::Config;
pub use errors::GenerateError;
pub use pacing::RateLimiter;
pub use status::{ChannelObserver, NullObserver, StatusObserver, StatusUpdate};
