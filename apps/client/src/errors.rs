use thiserror::Error;

/// Failure taxonomy for content generation.
///
/// Under the default resilient policy only `EmptyPrompt` ever reaches the
/// caller; everything else is masked by demo output. The strict policy
/// surfaces every variant, so each message names the likely cause and a
/// remediation step; they are shown to end users as-is.
#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    #[error("Prompt must not be empty.")]
    EmptyPrompt,

    #[error("Rate limited by the generation service.")]
    RateLimited,

    #[error("Still rate limited after {retries} retries. Please wait a moment before trying again.")]
    RateLimitExceeded { retries: u32 },

    #[error("No response generated. Please try again with a different request.")]
    NoCandidate,

    #[error("The API key was rejected. Generate a new key in Google AI Studio and set GEMINI_API_KEY.")]
    InvalidApiKey,

    #[error("Access forbidden. Check that the Generative Language API is enabled for your key and that the key has no blocking restrictions.")]
    AccessForbidden,

    #[error("The generation service is not available in your region.")]
    UnsupportedRegion,

    #[error("The generation service rejected the request: {0}")]
    BadRequest(String),

    #[error("Unexpected response from the generation service (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("The request timed out. Check your connection and try again.")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not parse the service response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_exceeded_message_asks_caller_to_wait() {
        let err = GenerateError::RateLimitExceeded { retries: 2 };
        let msg = err.to_string();
        assert!(msg.contains("2 retries"));
        assert!(msg.to_lowercase().contains("wait"));
    }

    #[test]
    fn test_no_candidate_message_matches_user_facing_copy() {
        assert!(GenerateError::NoCandidate
            .to_string()
            .starts_with("No response generated."));
    }

    #[test]
    fn test_invalid_key_message_names_remediation() {
        let msg = GenerateError::InvalidApiKey.to_string();
        assert!(msg.contains("AI Studio"));
        assert!(msg.contains("GEMINI_API_KEY"));
    }
}
