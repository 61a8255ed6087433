use std::env;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Process-wide configuration, read once at startup and passed to the
/// summarizer at construction. The credential lives here explicitly
/// rather than in a hidden global setting; reconfiguring means building
/// a new `AppConfig` and a new `Summarizer` from it.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Default credential for the remote summarization endpoint. When
    /// absent (and no per-call override is given), the local rule-based
    /// path is used.
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: Option<String>,
}

impl AppConfig {
    /// Every field is optional — a missing credential just selects the
    /// local fallback path — so reading the environment cannot fail.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            openai_model: env::var("OPENAI_MODEL").ok(),
            openai_base_url: env::var("OPENAI_BASE_URL").ok(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.openai_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}
