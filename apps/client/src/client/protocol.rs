//! Wire types for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    pub safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Response
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the first non-blank candidate text, if any.
    pub fn text(&self) -> Option<&str> {
        self.candidates.iter().find_map(|candidate| {
            candidate
                .content
                .as_ref()?
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .find(|text| !text.trim().is_empty())
        })
    }
}

/// Error envelope the service wraps failures in.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
