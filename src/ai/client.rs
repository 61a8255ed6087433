//! LLM API client.
//!
//! Encapsulates the single outbound chat-completion request used to
//! generate a digest remotely.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::core::models::Item;
use crate::errors::SummarizeError;

/// Separator between item texts in the user message, distinct from any
/// text an item itself can contain on a single line.
pub const ITEM_SEPARATOR: &str = "\n\n---\n\n";

const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that summarizes notifications \
    concisely. Create a brief, scannable summary. Use bullet points. Highlight urgent items. \
    Keep it under 150 words.";

const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f64 = 0.5;

/// Client for the remote summarization endpoint.
pub struct LlmClient {
    api_key: String,
    model_name: String,
    base_url: String,
    http: Client,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url,
            // Transport defaults only; the dispatcher contract forbids a
            // timeout override.
            http: Client::new(),
        }
    }

    /// Concatenate the display texts of `items` in the given order.
    #[must_use]
    pub fn build_input(items: &[Item]) -> String {
        items
            .iter()
            .map(Item::display_text)
            .collect::<Vec<_>>()
            .join(ITEM_SEPARATOR)
    }

    /// Issue the chat-completion request once and return the trimmed
    /// generated text.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if the request cannot be constructed, `Http` on
    /// transport failure, `Api` on a non-success status, and
    /// `EmptyResponse` when a success response carries no usable
    /// generated text.
    pub async fn generate_digest(&self, items: &[Item]) -> Result<String, SummarizeError> {
        info!("Generating remote digest for {} items", items.len());

        let input_text = Self::build_input(items);

        let request_body = json!({
            "model": self.model_name,
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                { "role": "user", "content": format!("Summarize these notifications:\n\n{input_text}") }
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE
        });

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|_| SummarizeError::InvalidRequest)?;
        headers.insert("Authorization", auth_value);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizeError::Http(format!("summarization request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Summarization endpoint returned status {}", status);
            return Err(SummarizeError::Api {
                status: status.as_u16(),
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|_| SummarizeError::EmptyResponse)?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(SummarizeError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
