//! CLI argument definitions for tickscrape.

use clap::Parser;

/// Request a stock price scrape job and print the resulting download link.
///
/// The job runs against the live scrape service by default; `--mock`
/// selects the in-process simulated dispatcher instead. Submission is
/// gated behind a one-time simulated payment per session.
///
/// # Examples
///
/// ```bash
/// # Simulated end-to-end run, no live service needed
/// tickscrape AAPL MSFT --start 2024-01-01 --end 2024-01-31 --mock
///
/// # Live dispatch (endpoint and key from the environment)
/// tickscrape AAPL --start 2024-01-01 --end 2024-01-31 --format csv
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "tickscrape",
    author,
    version,
    about = "Stock price scrape-job client"
)]
pub struct Cli {
    /// Stock symbols to scrape (e.g. AAPL MSFT GOOGL).
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,

    /// Start of the date range, YYYY-MM-DD.
    #[arg(long)]
    pub start: String,

    /// End of the date range, YYYY-MM-DD.
    #[arg(long)]
    pub end: String,

    /// Output format for the scraped artifact (json or csv).
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Use the in-process simulated dispatcher instead of the live service.
    #[arg(long, default_value_t = false)]
    pub mock: bool,

    /// Override the scrape service endpoint URL.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the scrape service API key.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Abandon the simulated payment instead of completing it.
    #[arg(long, default_value_t = false)]
    pub decline_payment: bool,
}
