use thiserror::Error;

/// Validation errors raised while assembling a scrape job request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one non-blank stock symbol is required")]
    NoSymbols,
    #[error("start date is required")]
    MissingStartDate,
    #[error("end date is required")]
    MissingEndDate,
    #[error("output format is required")]
    MissingOutputFormat,
    #[error("invalid output format '{value}', expected one of json, csv")]
    InvalidOutputFormat { value: String },
    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: time::Date, end: time::Date },
}

/// Normalized dispatch failure surfaced to the lifecycle controller.
///
/// A [`JobClient`](crate::JobClient) converts every failure mode into
/// exactly one of these variants before returning control; callers never
/// observe a raw transport error. The user-visible behavior is the message
/// alone.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JobError {
    /// The transport never produced a response (connection refused, DNS
    /// failure, timeout).
    #[error("{0}")]
    Network(String),
    /// The service replied with an explicit rejection.
    #[error("{message}")]
    Server {
        /// Originating HTTP status, when one was observed.
        status: Option<u16>,
        message: String,
    },
    /// Any failure that fits neither bucket.
    #[error("{0}")]
    Unknown(String),
}

impl JobError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown(message.into())
    }

    /// The human-readable message carried by every variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message) | Self::Unknown(message) => message,
            Self::Server { message, .. } => message,
        }
    }
}
