//! `tickscrape` — stock price scrape-job client.
//!
//! Validates a scrape request from the command line, walks the simulated
//! paywall, dispatches the job (live service or in-process simulation),
//! and prints the resulting download link.
//!
//! # Environment variables
//!
//! | Variable                  | Required      | Default | Description |
//! |---------------------------|---------------|---------|-------------|
//! | `TICKSCRAPE_API_ENDPOINT` | no            | placeholder endpoint | Scrape service URL |
//! | `TICKSCRAPE_API_KEY`      | live mode only| --      | Service API key |

mod cli;
mod config;
mod error;
mod paywall;
mod presenter;
mod scrape;

use clap::Parser;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tickscrape_cli=warn,tickscrape_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    scrape::run(&cli).await
}
