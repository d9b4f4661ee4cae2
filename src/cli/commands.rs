//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use crate::core::client::TranslationClient;

/// Commands for the translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a single text and print the result
    Translate {
        /// Text to translate
        text: String,

        /// Source language code (e.g. en)
        #[arg(short, long)]
        from: String,

        /// Target language code (e.g. ar)
        #[arg(short, long)]
        to: String,
    },

    /// Start HTTP API server
    Server {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

/// Handle single-text translation command
pub async fn handle_translate(
    translator: &TranslationClient,
    text: String,
    from: String,
    to: String,
) -> anyhow::Result<()> {
    info!("Translating {} chars from {} to {}", text.chars().count(), from, to);

    let translation = translator.translate(&text, &from, &to).await?;
    println!("{}", translation);

    Ok(())
}

/// Handle server command
pub async fn handle_server(translator: TranslationClient, host: String, port: u16) -> anyhow::Result<()> {
    crate::server::api::run_server(host, port, translator).await
}
