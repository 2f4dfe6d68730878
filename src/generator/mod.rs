pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Everything that can go wrong talking to the text-generation service.
///
/// Callers never show these to the user directly; the rewrite client folds
/// every variant into one warning string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("no Gemini API key found. Run `tonewise login <KEY>` or set GEMINI_API_KEY")]
    MissingApiKey,

    #[error("network error: {0}")]
    Network(String),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Gemini withheld the answer: {0}")]
    Blocked(String),

    #[error("malformed response from Gemini: {0}")]
    MalformedResponse(String),
}

/// The outside writer. Could be Gemini, or a script in a test.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Model identifier sent along with every prompt.
    fn model(&self) -> &str;

    /// Turn a prompt into text. Empty output is a valid answer.
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError>;
}
