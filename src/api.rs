//! Wire-level response types.

use serde::Serialize;

// ============================================================================
// Envelope
// ============================================================================

/// Uniform `{success, message, data}` wrapper returned by every operation.
///
/// `data` serializes as `null` when absent (delete responses, failure
/// envelopes).
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: &'static str,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying a payload.
    pub fn success(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message,
            data: Some(data),
        }
    }

    /// Successful envelope with `data: null` (deletes).
    pub fn success_empty(message: &'static str) -> Self {
        Self {
            success: true,
            message,
            data: None,
        }
    }

    /// Failure envelope with `data: null`.
    ///
    /// Only task creation reports store failures this way; every other write
    /// raises a typed service error instead.
    pub fn failure(message: &'static str) -> Self {
        Self {
            success: false,
            message,
            data: None,
        }
    }
}

// ============================================================================
// Error Body
// ============================================================================

/// Body shape for translated service errors (404/500).
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ErrorBody {
    pub fn new(message: &'static str, status_code: u16) -> Self {
        Self {
            message,
            status_code,
        }
    }
}
