//! Ollama-backed query translator.

use super::provider::{QueryTranslator, TranslatorError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Translates queries through an Ollama server's `/api/generate` endpoint.
pub struct OllamaTranslator {
    client: Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

fn build_prompt(query: &str) -> String {
    format!(
        "You are a music chart query parser. Classify the query into one of \
         these intents: top_songs (top/best songs of a year), top_songs_decade \
         (top songs of a decade), song_duration (how long a song was on the \
         chart), song_duration_with_artist (the same, naming an artist).\n\
         \n\
         Output format, one line:\n\
         intent: <type>; [year: YYYY]; [n: NUMBER]; [song: SONG NAME]; [artist: ARTIST NAME]\n\
         \n\
         Examples:\n\
         Query: Show me top 10 songs of 2020\n\
         Output: intent: top_songs; year: 2020; n: 10\n\
         Query: How long was Shape of You on the chart?\n\
         Output: intent: song_duration; song: Shape of You\n\
         Query: How long did Hotline Bling by Drake stay on chart?\n\
         Output: intent: song_duration_with_artist; song: Hotline Bling; artist: Drake\n\
         \n\
         Return exactly one intent and nothing else.\n\
         \n\
         Query: {query}\n\
         Output:"
    )
}

impl OllamaTranslator {
    /// # Arguments
    /// * `base_url` - Base URL of the Ollama server (e.g., "http://localhost:11434").
    /// * `model` - Model to use (e.g., "llama3.1:8b").
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> OllamaTranslator {
        OllamaTranslator {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            timeout,
        }
    }

    /// Check that the server is reachable and knows the configured model.
    pub async fn health_check(&self) -> Result<(), TranslatorError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslatorError::Timeout
                } else {
                    TranslatorError::Connection(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(TranslatorError::Api {
                status: response.status().as_u16(),
                message: "Health check failed".to_string(),
            });
        }

        let tags: OllamaTagsResponse = response.json().await.map_err(|e| {
            TranslatorError::InvalidResponse(format!("Failed to parse tags response: {}", e))
        })?;

        if !tags.models.iter().any(|m| m.name == self.model) {
            warn!(
                model = %self.model,
                available_models = ?tags.models.iter().map(|m| &m.name).collect::<Vec<_>>(),
                "Configured model not found in Ollama"
            );
        }

        Ok(())
    }
}

#[async_trait]
impl QueryTranslator for OllamaTranslator {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn translate(&self, query: &str) -> Result<String, TranslatorError> {
        let url = format!("{}/api/generate", self.base_url);

        let request = OllamaGenerateRequest {
            model: self.model.clone(),
            prompt: build_prompt(query),
            stream: false,
            options: OllamaOptions {
                // Deterministic output, we want a parser not a poet
                temperature: 0.0,
            },
        };

        debug!(model = %self.model, "Sending translation request to Ollama");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslatorError::Timeout
                } else {
                    TranslatorError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslatorError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let ollama_response: OllamaGenerateResponse = response.json().await.map_err(|e| {
            TranslatorError::InvalidResponse(format!("Failed to parse Ollama response: {}", e))
        })?;

        debug!(
            response = %ollama_response.response,
            "Received translation from Ollama"
        );

        Ok(ollama_response.response.trim().to_string())
    }
}

// Ollama API types

#[derive(Debug, Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct OllamaTagsResponse {
    models: Vec<OllamaModel>,
}

#[derive(Debug, Deserialize)]
struct OllamaModel {
    name: String,
}
