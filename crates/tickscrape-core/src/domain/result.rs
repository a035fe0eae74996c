use serde::{Deserialize, Serialize};

/// Outcome of a completed scrape job, as returned by the service.
///
/// All fields are consumed verbatim from the response body; the echo fields
/// repeat the originating request so the presentation layer needs no access
/// to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    /// Opaque locator of the artifact in object storage.
    pub s3_uri: String,
    /// Time-limited pre-signed retrieval link.
    pub download_url: String,
    /// Human-readable validity window of the download link.
    pub expiration: String,
    pub stock_symbols: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub output_format: String,
}
