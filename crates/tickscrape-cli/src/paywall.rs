//! Simulated payment-processor collaborator.
//!
//! Stands in for the external card-capture SDK: presents the price,
//! pretends to charge the card, and reports a boolean completion signal.
//! The core only ever sees the resulting gate transitions; no card data
//! exists anywhere in the process.

use std::time::Duration;

/// Price of one scraping job in USD.
pub const JOB_PRICE_USD: f64 = 5.00;

/// Artificial processing delay matching a card-capture round trip.
const CAPTURE_DELAY: Duration = Duration::from_millis(1500);

/// Simulate capturing the charge.
///
/// Always succeeds; a real integration would surface the processor's
/// outcome here.
pub async fn capture(amount_usd: f64) -> bool {
    tracing::debug!(amount_usd, "capturing simulated payment");
    tokio::time::sleep(CAPTURE_DELAY).await;
    true
}
