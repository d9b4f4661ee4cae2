//! Main entry point for the LLM translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use llm_translator::cli::commands::{self, Commands};
use llm_translator::{TranslationClient, TranslationConfig};

/// Translate text through an LLM chat-completion endpoint
#[derive(Parser, Debug)]
#[command(name = "llm-translator", version, about, long_about = None)]
struct Args {
    /// API key (optional, defaults to TRANSLATION_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Load configuration from a JSON file instead of the environment
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("llm_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --api-key overrides both the environment and the config file
    let config = TranslationConfig::load(args.config.as_deref(), args.api_key)?;

    let translator = TranslationClient::new(config)?;

    match args.command {
        Commands::Translate { text, from, to } => {
            commands::handle_translate(&translator, text, from, to).await?;
        }
        Commands::Server { host, port } => {
            commands::handle_server(translator, host, port).await?;
        }
    }

    Ok(())
}
