//! Main entry point for the DeepLX filter CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod core;
mod filter;
mod processors;
mod server;

use cli::commands::Commands;

/// DeepLX Filter - translation middleware for chat pipelines
#[derive(Parser, Debug)]
#[command(name = "deeplx-filter", version, about, long_about = None)]
struct Args {
    /// DeepLX endpoint URL (defaults to DEEPLX_API_URL env var)
    #[arg(long)]
    api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("deeplx_filter={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Override config with CLI args if provided
    if let Some(api_url) = args.api_url {
        std::env::set_var("DEEPLX_API_URL", api_url);
    }

    // Execute command
    match args.command {
        Some(Commands::Serve { host, port }) => {
            cli::commands::handle_serve(host, port).await?;
        }
        Some(Commands::Translate {
            text,
            source,
            target,
        }) => {
            cli::commands::handle_translate(text, source, target).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
