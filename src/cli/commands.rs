//! CLI command definitions and handlers

use clap::Subcommand;

use crate::core::models::TranslationOutcome;
use crate::filter::MessageTranslator;

/// Commands for the DeepLX filter
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the hook HTTP server
    Serve {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },

    /// Translate one block of text through the full pipeline
    Translate {
        /// Text to translate
        #[arg(short, long)]
        text: String,

        /// Source language (default: auto-detect)
        #[arg(long, default_value = "auto")]
        source: String,

        /// Target language (default: en)
        #[arg(long, default_value = "en")]
        target: String,
    },
}

/// Handle the serve command
pub async fn handle_serve(host: String, port: u16) -> anyhow::Result<()> {
    crate::server::api::run_server(host, port).await
}

/// Handle the one-off translate command
pub async fn handle_translate(text: String, source: String, target: String) -> anyhow::Result<()> {
    let translator = MessageTranslator::from_env()?;

    match translator.translate_text(&text, &source, &target).await {
        TranslationOutcome::Translated(result) => {
            println!("{}", result);
            Ok(())
        }
        TranslationOutcome::Failed { reason, .. } => {
            Err(anyhow::anyhow!("translation failed: {}", reason))
        }
    }
}
