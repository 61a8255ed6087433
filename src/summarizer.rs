//! Summarization dispatcher.
//!
//! Chooses between the remote chat-completion path and the local
//! rule-based path for a sequence of items, and surfaces remote
//! failures as typed errors instead of silently degrading.

use tracing::info;

use crate::ai::client::LlmClient;
use crate::ai::rules::digest_with_rules;
use crate::core::config::AppConfig;
use crate::core::models::Item;
use crate::errors::SummarizeError;

/// Message returned when there is nothing to summarize. No remote call
/// and no grouping happens for an empty input.
pub const EMPTY_INPUT_DIGEST: &str = "No notifications to summarize.";

/// Stateless-per-call dispatcher. The only state held across calls is
/// the configuration captured at construction; changing the default
/// credential means constructing a new `Summarizer`.
pub struct Summarizer {
    default_api_key: Option<String>,
    model_name: String,
    base_url: String,
}

impl Summarizer {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            default_api_key: config.openai_api_key.clone(),
            model_name: config.model().to_string(),
            base_url: config.base_url().to_string(),
        }
    }

    /// Produce a digest for `items`, in the order supplied by the caller.
    ///
    /// Credential resolution: an explicit `credential_override` wins
    /// over the configured default. If the winning value is empty, or
    /// neither is present, the local rule-based path is taken and no
    /// network call is made. Once a non-empty credential resolves, the
    /// remote path is mandatory — a failed remote call is returned as
    /// an error, never papered over with the local digest ("no
    /// credential" and "remote call failed" must stay observably
    /// different).
    ///
    /// # Errors
    ///
    /// Remote-path failures only; the local path and the empty-input
    /// short-circuit always succeed.
    pub async fn summarize(
        &self,
        items: &[Item],
        credential_override: Option<&str>,
    ) -> Result<String, SummarizeError> {
        if items.is_empty() {
            return Ok(EMPTY_INPUT_DIGEST.to_string());
        }

        let credential = credential_override
            .map(str::to_owned)
            .or_else(|| self.default_api_key.clone());

        match credential {
            Some(key) if !key.is_empty() => {
                let client = LlmClient::new(key, self.model_name.clone(), self.base_url.clone());
                client.generate_digest(items).await
            }
            _ => {
                info!("No credential resolved, using rule-based digest");
                Ok(digest_with_rules(items))
            }
        }
    }
}
