//! Offline demo generator.
//!
//! Produces plausible canned output for each tool category so the rest of the
//! system is exercisable without live service access. This is pattern
//! matching, not generation: the first matching entry in [`KEYWORD_ROUTES`]
//! wins, and the same prompt always routes to the same template.

mod templates;

use std::time::Duration;

use tokio::time::sleep;

/// Canned response category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    CodeGeneration,
    Explanation,
    BugReport,
    Conversion,
    Documentation,
    Refactoring,
    Completion,
    Generic,
}

impl Template {
    pub fn body(self) -> &'static str {
        match self {
            Template::CodeGeneration => templates::CODE_GENERATION,
            Template::Explanation => templates::EXPLANATION,
            Template::BugReport => templates::BUG_REPORT,
            Template::Conversion => templates::CONVERSION,
            Template::Documentation => templates::DOCUMENTATION,
            Template::Refactoring => templates::REFACTORING,
            Template::Completion => templates::COMPLETION,
            Template::Generic => templates::GENERIC,
        }
    }
}

/// Ordered routing table evaluated against the lower-cased prompt.
/// Order is part of the contract: first match wins.
const KEYWORD_ROUTES: &[(&[&str], Template)] = &[
    (&["code generator", "generate code"], Template::CodeGeneration),
    (&["explain"], Template::Explanation),
    (&["bug", "detect"], Template::BugReport),
    (&["convert"], Template::Conversion),
    (&["document"], Template::Documentation),
    (&["refactor"], Template::Refactoring),
    (&["complete", "completion"], Template::Completion),
];

/// Artificial delay so demo mode feels like a network round trip.
const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

/// Routes a prompt to its canned response category.
pub fn classify(prompt: &str) -> Template {
    let haystack = prompt.to_lowercase();
    KEYWORD_ROUTES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| haystack.contains(keyword)))
        .map(|(_, template)| *template)
        .unwrap_or(Template::Generic)
}

/// Offline stand-in for the remote service.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    latency: Duration,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            latency: SIMULATED_LATENCY,
        }
    }

    pub async fn generate(&self, prompt: &str) -> String {
        sleep(self.latency).await;
        classify(prompt).body().to_string()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}
