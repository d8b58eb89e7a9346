use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chartbot_server::bot::ChartBot;
use chartbot_server::chart::load_chart_data;
use chartbot_server::config::{AppConfig, CliConfig, FileConfig};
use chartbot_server::server::{run_server, RequestsLoggingLevel, ServerConfig};
use chartbot_server::translator::{OllamaTranslator, QueryTranslator};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the cleaned chart dataset CSV file.
    #[clap(value_parser = parse_path)]
    pub dataset_path: Option<PathBuf>,

    /// Path to an optional TOML config file. File values override CLI args.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Base URL of an Ollama server used as the query-translator fallback.
    /// Without it the bot runs on the rule-based parser alone.
    #[clap(long)]
    pub translator_url: Option<String>,

    /// Model used by the query-translator fallback.
    #[clap(long)]
    pub translator_model: Option<String>,

    /// Timeout in seconds for query-translator requests.
    #[clap(long)]
    pub translator_timeout_sec: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };

    let cli_config = CliConfig {
        dataset_path: cli_args.dataset_path,
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        translator_url: cli_args.translator_url,
        translator_model: cli_args.translator_model,
        translator_timeout_sec: cli_args.translator_timeout_sec,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let store = Arc::new(load_chart_data(&config.dataset_path)?);

    let translator: Option<Arc<dyn QueryTranslator>> = match &config.translator.url {
        Some(url) => {
            let translator = OllamaTranslator::new(
                url.clone(),
                config.translator.model.clone(),
                Duration::from_secs(config.translator.timeout_sec),
            );
            if let Err(err) = translator.health_check().await {
                warn!("Query translator health check failed: {err}");
            }
            info!("Query translator enabled: {} at {}", config.translator.model, url);
            Some(Arc::new(translator) as Arc<dyn QueryTranslator>)
        }
        None => {
            info!("No query translator configured, using the rule-based parser only");
            None
        }
    };

    let bot = Arc::new(ChartBot::new(store.clone(), translator));

    let server_config = ServerConfig {
        port: config.port,
        requests_logging_level: config.logging_level,
    };
    run_server(server_config, store, bot).await
}
