//! ChartBot Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod bot;
pub mod chart;
pub mod config;
pub mod parser;
pub mod query;
pub mod search;
pub mod server;
pub mod translator;

// Re-export commonly used types for convenience
pub use bot::ChartBot;
pub use chart::{load_chart_data, ChartStore};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
pub use translator::{OllamaTranslator, QueryTranslator};
