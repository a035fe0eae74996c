//! # Tickscrape Core
//!
//! Job lifecycle contracts and dispatch clients for the tickscrape
//! stock-price scrape-job client.
//!
//! ## Overview
//!
//! This crate provides the non-visual core of the application:
//!
//! - **Domain model** for scrape job requests and results
//! - **Request builder** that normalizes and validates raw form input
//! - **`JobClient` capability** with a live HTTP implementation and an
//!   in-process simulated one, selected once at composition time
//! - **Payment gate** simulating the one-shot paywall in front of dispatch
//! - **Lifecycle controller** owning the submit → dispatch → outcome
//!   state machine
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`clients`] | `JobClient` implementations (remote, simulated) |
//! | [`domain`] | Job request/result models and validation |
//! | [`error`] | Validation and dispatch error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`job_client`] | Dispatch capability trait |
//! | [`lifecycle`] | Lifecycle controller and state machine |
//! | [`payment`] | One-shot payment gate |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickscrape_core::{
//!     parse_date, JobLifecycleController, JobRequest, OutputFormat, SimulatedJobClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = JobRequest::builder()
//!         .symbols(["AAPL", "MSFT"])
//!         .start_date(parse_date("2024-01-01")?)
//!         .end_date(parse_date("2024-01-31")?)
//!         .output_format(OutputFormat::Json)
//!         .build()?;
//!
//!     let mut controller = JobLifecycleController::new(Arc::new(SimulatedJobClient::new()));
//!     controller.payment_mut().initiate()?;
//!     controller.payment_mut().confirm()?;
//!
//!     let state = controller.submit(request).await?;
//!     println!("{state:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every dispatch failure reaches the caller as exactly one normalized
//! [`JobError`] variant:
//!
//! ```rust
//! use tickscrape_core::JobError;
//!
//! fn describe(error: &JobError) -> &str {
//!     match error {
//!         JobError::Network(_) => "transport unreachable",
//!         JobError::Server { .. } => "service rejected the job",
//!         JobError::Unknown(_) => "unclassified failure",
//!     }
//! }
//! ```

pub mod clients;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod job_client;
pub mod lifecycle;
pub mod payment;

// Re-export commonly used types at crate root for convenience

// Client implementations
pub use clients::{RemoteConfig, RemoteJobClient, SimulatedJobClient};

// Domain models
pub use domain::{parse_date, JobRequest, JobRequestBuilder, JobResult, OutputFormat};

// Error types
pub use error::{JobError, ValidationError};

// HTTP client types
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};

// Dispatch capability
pub use job_client::JobClient;

// Lifecycle state machine
pub use lifecycle::{JobLifecycleController, LifecycleState, SubmitError};

// Payment gate
pub use payment::{PaymentError, PaymentGate, PaymentState};
