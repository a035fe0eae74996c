use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::{JobClient, JobError, JobRequest, JobResult};

const STORAGE_BUCKET: &str = "stock-data-bucket";
const LINK_EXPIRATION: &str = "1 hour";
const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Compact timestamp embedded in synthesized artifact names.
const ARTIFACT_TIMESTAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day][hour][minute][second]");

/// In-process stand-in used when no live service is configured.
///
/// After a fixed artificial delay, synthesizes a result whose storage
/// locator and download URL are derived deterministically from the
/// request's symbols, format, and the submission timestamp. Never fails
/// under valid input.
pub struct SimulatedJobClient {
    delay: Duration,
}

impl SimulatedJobClient {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Override the artificial delay, mainly for tests.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    fn synthesize(&self, request: &JobRequest) -> JobResult {
        let stamp = OffsetDateTime::now_utc()
            .format(ARTIFACT_TIMESTAMP)
            .expect("artifact timestamps must be formattable");
        let object_key = format!(
            "data/stock_data_{}_{}.{}",
            request.symbols.join("_"),
            stamp,
            request.format.as_str(),
        );

        JobResult {
            s3_uri: format!("s3://{STORAGE_BUCKET}/{object_key}"),
            download_url: format!("https://{STORAGE_BUCKET}.s3.amazonaws.com/{object_key}"),
            expiration: String::from(LINK_EXPIRATION),
            stock_symbols: request.symbols.clone(),
            start_date: request.start_date(),
            end_date: request.end_date(),
            output_format: request.format.as_str().to_owned(),
        }
    }
}

impl Default for SimulatedJobClient {
    fn default() -> Self {
        Self::new()
    }
}

impl JobClient for SimulatedJobClient {
    fn dispatch<'a>(
        &'a self,
        request: JobRequest,
    ) -> Pin<Box<dyn Future<Output = Result<JobResult, JobError>> + Send + 'a>> {
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            Ok(self.synthesize(&request))
        })
    }
}
