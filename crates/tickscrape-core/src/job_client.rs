//! Dispatch capability for scrape jobs.
//!
//! A [`JobClient`] sends one validated [`JobRequest`] and resolves to
//! exactly one outcome: a [`JobResult`] or a normalized [`JobError`]. No
//! partial state is observable between dispatch start and resolution.
//!
//! Two implementations exist, selected once at composition time by the
//! binary's client factory and never branched per call:
//!
//! | Implementation | Transport |
//! |----------------|-----------|
//! | [`RemoteJobClient`](crate::RemoteJobClient) | HTTPS POST to the configured service |
//! | [`SimulatedJobClient`](crate::SimulatedJobClient) | in-process synthesis after a fixed delay |

use std::future::Future;
use std::pin::Pin;

use crate::{JobError, JobRequest, JobResult};

/// Capability to send a validated job request and await its outcome.
///
/// Implementations must be `Send + Sync`; the controller holds one behind
/// an `Arc<dyn JobClient>` for the lifetime of the session.
pub trait JobClient: Send + Sync {
    /// Dispatch one job.
    ///
    /// # Errors
    ///
    /// Returns a [`JobError`] already normalized into the
    /// network/server/unknown taxonomy; implementations never leak raw
    /// transport failures.
    fn dispatch<'a>(
        &'a self,
        request: JobRequest,
    ) -> Pin<Box<dyn Future<Output = Result<JobResult, JobError>> + Send + 'a>>;
}
