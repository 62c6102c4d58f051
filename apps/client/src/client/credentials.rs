//! Syntactic API-key validation.
//!
//! A cheap pre-filter only: a key that passes these checks can still be
//! rejected by the service. The checks mirror the shape of issued keys: the
//! `AIza` prefix and their fixed length.

/// Placeholder value shipped in env templates; never a real key.
const PLACEHOLDER: &str = "YOUR_API_KEY_HERE";
/// Issued Gemini API keys start with this prefix.
const KEY_PREFIX: &str = "AIza";
/// Issued keys are 39 characters; anything shorter was truncated.
const MIN_KEY_LEN: usize = 39;

/// Result of the syntactic key check, with an explanation suitable for a
/// settings notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStatus {
    pub valid: bool,
    pub message: &'static str,
}

/// Strict gate used by the client: only a well-formed key reaches the network.
pub fn is_configured(key: Option<&str>) -> bool {
    key_status(key).valid
}

/// Classifies the configured key and explains the resulting mode.
pub fn key_status(key: Option<&str>) -> KeyStatus {
    let Some(key) = key else {
        return KeyStatus {
            valid: false,
            message: "No API key found - running in demo mode",
        };
    };

    let key = key.trim();
    if key.is_empty() {
        return KeyStatus {
            valid: false,
            message: "No API key found - running in demo mode",
        };
    }
    if key == PLACEHOLDER {
        return KeyStatus {
            valid: false,
            message: "Placeholder API key - running in demo mode",
        };
    }
    if !key.starts_with(KEY_PREFIX) {
        return KeyStatus {
            valid: false,
            message: "Invalid API key format - running in demo mode",
        };
    }
    if key.len() < MIN_KEY_LEN {
        return KeyStatus {
            valid: false,
            message: "API key appears to be too short - running in demo mode",
        };
    }

    KeyStatus {
        valid: true,
        message: "API key format appears valid",
    }
}
