use thiserror::Error;

/// Failures surfaced by the summarization dispatcher.
///
/// A remote failure is terminal for the call that produced it; the
/// dispatcher never retries and never substitutes the rule-based digest
/// for a failed remote call.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The request could not be constructed, e.g. the credential is not
    /// a valid header value.
    #[error("Invalid request")]
    InvalidRequest,

    /// Transport-level failure of the outbound call.
    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    /// The endpoint answered with a non-success status.
    #[error("API error (status {status})")]
    Api { status: u16 },

    /// Success status, but no generated text in the response body.
    #[error("Empty response from API")]
    EmptyResponse,
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::Http(error.to_string())
    }
}
