//! Query translator trait definition.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when calling an external query translator.
#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timeout")]
    Timeout,
}

/// Translates a free-text chart question into a structured hint string.
///
/// The expected output shape is `intent: X; key: value; ...`, but
/// implementations are backed by language models and may return something
/// malformed, truncated or plain wrong. Callers must sanitize the output
/// (see `parser::parse_translator_hint`) and must treat every call as slow
/// and fallible: one attempt, no retry.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait QueryTranslator: Send + Sync {
    /// The provider's name, for logging.
    fn name(&self) -> &str;

    async fn translate(&self, query: &str) -> Result<String, TranslatorError>;
}
