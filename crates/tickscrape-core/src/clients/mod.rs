//! `JobClient` implementations.

mod remote;
mod simulated;

pub use remote::{RemoteConfig, RemoteJobClient};
pub use simulated::SimulatedJobClient;
