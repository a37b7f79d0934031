//! Fetch failures carried by [`AsyncResourceState::Error`](super::AsyncResourceState::Error).

use thiserror::Error;

/// Why fetching an async resource failed.
///
/// Fetch failures are ordinary data: they are stored in the resource state,
/// read back through the error-cause lens, and cleared by resetting the
/// resource to `Empty`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FetchError {
    /// The transport failed before a response arrived.
    #[error("network failure: {0}")]
    Network(String),

    /// The remote answered with a non-success status code.
    #[error("remote responded with status {0}")]
    Status(u16),

    /// The response arrived but its payload could not be decoded.
    #[error("payload could not be decoded: {0}")]
    Decode(String),

    /// The orchestrator abandoned the fetch.
    #[error("fetch cancelled")]
    Cancelled,
}
