use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] tickscrape_core::ValidationError),

    #[error(transparent)]
    Payment(#[from] tickscrape_core::PaymentError),

    #[error(transparent)]
    Submit(#[from] tickscrape_core::SubmitError),

    #[error("payment was cancelled before completion; no job was submitted")]
    PaymentDeclined,

    #[error("TICKSCRAPE_API_KEY must be set to dispatch to the live service (or pass --mock)")]
    MissingApiKey,
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::MissingApiKey => 2,
            Self::Submit(_) => 5,
            Self::Payment(_) | Self::PaymentDeclined => 6,
        }
    }
}
