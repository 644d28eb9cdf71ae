//! Voting backend client.
//!
//! The sign-in flows only see the [`VoterApi`] capability; [`HttpVoterApi`]
//! is the reqwest-backed implementation used by the binaries, and tests
//! substitute their own.

mod error;
mod http;
pub mod types;

use async_trait::async_trait;
pub use error::{ApiError, ApiErrorKind, ApiResult, classify_reqwest_error};
pub use http::HttpVoterApi;
pub use types::{HealthStatus, RegistrationReceipt, VoterRecord, VoterRegistration, VoterStatus};

/// Operations the sign-in surface needs from the backend.
///
/// One request per call, no retries.
#[async_trait]
pub trait VoterApi: Send + Sync {
    /// Fetches the full voter roster.
    async fn list_voters(&self) -> ApiResult<Vec<VoterRecord>>;

    /// Submits a self-registration.
    async fn register_voter(&self, draft: &VoterRegistration) -> ApiResult<RegistrationReceipt>;

    /// Probes backend liveness.
    async fn health(&self) -> ApiResult<HealthStatus>;
}
