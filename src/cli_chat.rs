use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

mod cli_style;
use cli_style::get_styles;

use chartbot_server::bot::ChartBot;
use chartbot_server::chart::load_chart_data;
use chartbot_server::translator::{OllamaTranslator, QueryTranslator};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s)
        .canonicalize()
        .with_context(|| format!("Error resolving path: {}", s))?;
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Path to the cleaned chart dataset CSV file.
    #[clap(value_parser = parse_path)]
    pub dataset_path: PathBuf,

    /// Base URL of an Ollama server used as the query-translator fallback.
    #[clap(long)]
    pub translator_url: Option<String>,

    /// Model used by the query-translator fallback.
    #[clap(long, default_value = "llama3.1:8b")]
    pub translator_model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    println!(
        "Cli Chat loading chart dataset at {}...",
        cli_args.dataset_path.display()
    );
    let store = Arc::new(load_chart_data(&cli_args.dataset_path)?);
    println!(
        "Done! {} records ({}-{}).",
        store.len(),
        store.min_year(),
        store.max_year()
    );

    let translator = cli_args.translator_url.map(|url| {
        Arc::new(OllamaTranslator::new(
            url,
            cli_args.translator_model.clone(),
            Duration::from_secs(30),
        )) as Arc<dyn QueryTranslator>
    });
    let bot = ChartBot::new(store, translator);

    println!("Ask about the charts (\"exit\" to leave):\n");

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("chartbot> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    break;
                }
                let _ = editor.add_history_entry(line);
                let answer = bot.respond(line).await;
                println!("\n{answer}\n");
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
