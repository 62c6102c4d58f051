//! Reqwest transport for the Gemini `generateContent` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::client::protocol::{
    ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part, SafetySetting,
};
use crate::client::GenerationBackend;
use crate::errors::GenerateError;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Per-attempt network timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Static generation policy, not caller-tunable.
const TEMPERATURE: f64 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f64 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Harm categories all blocked at medium-and-above.
const SAFETY_CATEGORIES: &[&str] = &[
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

/// Live transport to the Gemini API.
#[derive(Clone)]
pub struct GeminiBackend {
    http: reqwest::Client,
    api_key: String,
}

impl GeminiBackend {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    fn build_request(prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
            safety_settings: SAFETY_CATEGORIES
                .iter()
                .map(|category| SafetySetting {
                    category: (*category).to_string(),
                    threshold: SAFETY_THRESHOLD.to_string(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let request = Self::build_request(prompt);

        let response = self
            .http
            .post(GEMINI_API_URL)
            .header("X-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerateError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_rejection(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::InvalidResponse(e.to_string()))?;

        debug!(
            candidates = parsed.candidates.len(),
            "generateContent response received"
        );

        parsed
            .text()
            .map(|text| text.to_string())
            .ok_or(GenerateError::NoCandidate)
    }
}

/// Splits reqwest failures into timeout and transport classes.
fn map_transport_error(e: reqwest::Error) -> GenerateError {
    if e.is_timeout() {
        GenerateError::Timeout
    } else {
        GenerateError::Network(e.to_string())
    }
}

/// Maps a non-success HTTP status onto the failure taxonomy. The 400 family
/// is split by sniffing the server's message, which is how the service
/// reports key and region problems.
fn classify_rejection(status: StatusCode, body: &str) -> GenerateError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::BAD_REQUEST => {
            if message.contains("API key not valid") {
                GenerateError::InvalidApiKey
            } else if message.contains("User location is not supported") {
                GenerateError::UnsupportedRegion
            } else {
                GenerateError::BadRequest(message)
            }
        }
        StatusCode::UNAUTHORIZED => GenerateError::InvalidApiKey,
        StatusCode::FORBIDDEN => GenerateError::AccessForbidden,
        _ => GenerateError::Upstream {
            status: status.as_u16(),
            message,
        },
    }
}
