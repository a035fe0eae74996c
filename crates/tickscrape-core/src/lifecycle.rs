//! Top-level job lifecycle state machine.

use std::sync::Arc;

use thiserror::Error;

use crate::payment::PaymentGate;
use crate::{JobClient, JobError, JobRequest, JobResult};

/// Observable lifecycle of the single job slot.
///
/// The in-flight request is owned by `Submitting` and discarded once the
/// outcome resolves; an outcome is retained only until the next accepted
/// submit overwrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    Submitting(JobRequest),
    Succeeded(JobResult),
    Failed(JobError),
}

/// Rejected submit command. The lifecycle state is left untouched and no
/// dispatch is performed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("payment is required before a job can be submitted")]
    PaymentRequired,
    #[error("a job is already being submitted")]
    InFlight,
}

/// Owns the lifecycle and payment state for one user session and sequences
/// accepted requests through the configured [`JobClient`].
///
/// Single-threaded by design: `dispatch` is the sole suspension point, at
/// most one dispatch is in flight, and there is no client-side timeout or
/// cancellation for it — the transport's own timeout is authoritative.
pub struct JobLifecycleController {
    client: Arc<dyn JobClient>,
    payment: PaymentGate,
    state: LifecycleState,
}

impl JobLifecycleController {
    pub fn new(client: Arc<dyn JobClient>) -> Self {
        Self {
            client,
            payment: PaymentGate::new(),
            state: LifecycleState::Idle,
        }
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn payment(&self) -> &PaymentGate {
        &self.payment
    }

    /// Mutable access for the payment-processor callback path
    /// (`initiate`/`confirm`/`cancel`). The controller itself only ever
    /// reads `is_paid`.
    pub fn payment_mut(&mut self) -> &mut PaymentGate {
        &mut self.payment
    }

    /// Submit a validated request.
    ///
    /// Exactly one dispatch is performed per accepted call; the outcome
    /// overwrites any prior result or failure. A failed job leaves the
    /// payment gate paid, so resubmission needs no second payment.
    ///
    /// # Errors
    ///
    /// Rejected without dispatching when a dispatch is already in flight or
    /// the payment gate is not satisfied; the lifecycle state is unchanged.
    pub async fn submit(
        &mut self,
        request: JobRequest,
    ) -> Result<&LifecycleState, SubmitError> {
        self.accept(request.clone())?;
        tracing::info!(
            symbols = request.symbols.len(),
            format = %request.format,
            "scrape job accepted"
        );

        let outcome = self.client.dispatch(request).await;
        Ok(self.resolve(outcome))
    }

    /// Guarded entry into `Submitting`.
    fn accept(&mut self, request: JobRequest) -> Result<(), SubmitError> {
        if matches!(self.state, LifecycleState::Submitting(_)) {
            return Err(SubmitError::InFlight);
        }
        if !self.payment.is_paid() {
            return Err(SubmitError::PaymentRequired);
        }
        self.state = LifecycleState::Submitting(request);
        Ok(())
    }

    fn resolve(&mut self, outcome: Result<JobResult, JobError>) -> &LifecycleState {
        self.state = match outcome {
            Ok(result) => LifecycleState::Succeeded(result),
            Err(error) => {
                tracing::warn!(error = %error, "scrape job failed");
                LifecycleState::Failed(error)
            }
        };
        &self.state
    }
}
