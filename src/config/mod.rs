mod file_config;

pub use file_config::{FileConfig, TranslatorConfig};

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

const DEFAULT_TRANSLATOR_MODEL: &str = "llama3.1:8b";
const DEFAULT_TRANSLATOR_TIMEOUT_SEC: u64 = 30;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub dataset_path: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub translator_url: Option<String>,
    pub translator_model: Option<String>,
    pub translator_timeout_sec: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub translator: TranslatorSettings,
}

#[derive(Debug, Clone)]
pub struct TranslatorSettings {
    pub enabled: bool, // true if a translator url is set
    pub url: Option<String>,
    pub model: String,
    pub timeout_sec: u64,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            url: None,
            model: DEFAULT_TRANSLATOR_MODEL.to_string(),
            timeout_sec: DEFAULT_TRANSLATOR_TIMEOUT_SEC,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let dataset_path = file
            .dataset_path
            .map(PathBuf::from)
            .or_else(|| cli.dataset_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("dataset_path must be specified via --dataset-path or in config file")
            })?;

        if !dataset_path.exists() {
            bail!("Dataset file does not exist: {:?}", dataset_path);
        }
        if !dataset_path.is_file() {
            bail!("dataset_path is not a file: {:?}", dataset_path);
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        // Translator settings - TOML [translator] section over CLI args
        let tr_file = file.translator.unwrap_or_default();
        let url = tr_file.url.or_else(|| cli.translator_url.clone());
        let translator = TranslatorSettings {
            enabled: url.is_some(),
            url,
            model: tr_file
                .model
                .or_else(|| cli.translator_model.clone())
                .unwrap_or_else(|| DEFAULT_TRANSLATOR_MODEL.to_string()),
            timeout_sec: tr_file
                .timeout_sec
                .or(cli.translator_timeout_sec)
                .unwrap_or(DEFAULT_TRANSLATOR_TIMEOUT_SEC),
        };

        Ok(Self {
            dataset_path,
            port,
            logging_level,
            translator,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
