//! External query-translator abstraction.
//!
//! The rule-based parser handles everything it recognizes locally; this
//! module is the optional, unreliable fallback that asks a language model to
//! translate a query into a structured hint. The pipeline runs and is tested
//! entirely without it.

mod ollama;
mod provider;

pub use ollama::OllamaTranslator;
pub use provider::{QueryTranslator, TranslatorError};
