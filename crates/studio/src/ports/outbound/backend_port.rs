//! GenerationBackendPort - the pluggable generation backend boundary
//!
//! Tool pages never talk to a concrete backend. They go through this
//! port, which the infrastructure layer implements twice: an HTTP
//! adapter for a real service and a stub adapter with canned output.
//! Swapping backends is a composition-root decision, not a UI change.

use copydeck_domain::{GenerationRequest, GenerationResult};
use thiserror::Error;

/// Errors from the generation backend.
///
/// The UI deliberately does not distinguish causes: every variant
/// surfaces as one generic retryable failure notice. The split exists
/// for logging and for adapter tests.
#[derive(Debug, Error, Clone)]
pub enum BackendError {
    /// Transport-level failure (connection refused, timeout, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("backend returned status {0}")]
    Status(u16),

    /// The backend answered, but the payload doesn't match the contract
    #[error("malformed backend response: {0}")]
    Malformed(String),
}

/// The generation backend contract.
///
/// Request/response shapes are defined by the domain types; transport
/// is the adapter's business. Futures are `?Send` on wasm because the
/// browser runtime is single-threaded.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait GenerationBackendPort: Send + Sync {
    async fn generate(&self, request: &GenerationRequest)
        -> Result<GenerationResult, BackendError>;
}
