//! One-shot payment gate consulted before job dispatch.

use thiserror::Error;

/// Session-scoped payment progress.
///
/// Never persisted; a new process starts over at `NotPaid` by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentState {
    #[default]
    NotPaid,
    AwaitingConfirmation,
    Paid,
}

/// Rejected payment gate transition. The gate state is left untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaymentError {
    #[error("a payment is already awaiting confirmation")]
    AlreadyPending,
    #[error("payment has already been completed for this session")]
    AlreadyPaid,
    #[error("no payment is awaiting confirmation")]
    NothingPending,
}

/// Tracks whether the user has completed the one-shot payment required to
/// submit a job.
///
/// `Paid` is terminal for the session; there is no de-provisioning path,
/// and a failed job never reverts the gate. The only guarantee consulted
/// by the dispatch path is [`is_paid`](PaymentGate::is_paid).
#[derive(Debug, Default)]
pub struct PaymentGate {
    state: PaymentState,
}

impl PaymentGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> PaymentState {
        self.state
    }

    pub const fn is_paid(&self) -> bool {
        matches!(self.state, PaymentState::Paid)
    }

    /// Open the payment flow.
    pub fn initiate(&mut self) -> Result<(), PaymentError> {
        match self.state {
            PaymentState::NotPaid => {
                self.state = PaymentState::AwaitingConfirmation;
                Ok(())
            }
            PaymentState::AwaitingConfirmation => Err(PaymentError::AlreadyPending),
            PaymentState::Paid => Err(PaymentError::AlreadyPaid),
        }
    }

    /// Completion signal from the payment processor. Idempotent once paid.
    pub fn confirm(&mut self) -> Result<(), PaymentError> {
        match self.state {
            PaymentState::AwaitingConfirmation | PaymentState::Paid => {
                self.state = PaymentState::Paid;
                Ok(())
            }
            PaymentState::NotPaid => Err(PaymentError::NothingPending),
        }
    }

    /// Abandon a pending payment.
    pub fn cancel(&mut self) -> Result<(), PaymentError> {
        match self.state {
            PaymentState::AwaitingConfirmation => {
                self.state = PaymentState::NotPaid;
                Ok(())
            }
            PaymentState::NotPaid => Err(PaymentError::NothingPending),
            PaymentState::Paid => Err(PaymentError::AlreadyPaid),
        }
    }
}
