//! Unified error type for store operations.

use thiserror::Error;

/// Errors surfaced by the remote store. No retries anywhere: every error is
/// returned to the service immediately.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure reaching the store.
    #[error("store request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The store's response body did not match the expected row shape.
    #[error("failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience type alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
