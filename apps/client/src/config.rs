use anyhow::Result;

/// Application configuration loaded from environment variables.
///
/// The API key is deliberately optional: a missing or malformed key selects
/// demo mode at call time instead of failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
