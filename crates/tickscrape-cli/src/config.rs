//! Deployment configuration for the live scrape service.

use tickscrape_core::RemoteConfig;

use crate::cli::Cli;
use crate::error::CliError;

/// Placeholder endpoint; a live deployment must override it via flag or
/// environment.
pub const DEFAULT_ENDPOINT: &str = "https://api-gateway-url/dev/scrape";

pub const ENDPOINT_VAR: &str = "TICKSCRAPE_API_ENDPOINT";
pub const API_KEY_VAR: &str = "TICKSCRAPE_API_KEY";

/// Resolve live-service configuration from flags and environment, once,
/// at composition time. Flags win over environment.
///
/// # Errors
///
/// There is no default API key; live dispatch without one is refused here
/// rather than at the service.
pub fn remote_config(cli: &Cli) -> Result<RemoteConfig, CliError> {
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| std::env::var(ENDPOINT_VAR).ok())
        .unwrap_or_else(|| String::from(DEFAULT_ENDPOINT));

    let api_key = cli
        .api_key
        .clone()
        .or_else(|| std::env::var(API_KEY_VAR).ok())
        .ok_or(CliError::MissingApiKey)?;

    Ok(RemoteConfig { endpoint, api_key })
}
