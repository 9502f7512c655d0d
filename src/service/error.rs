//! Typed service errors and their HTTP translation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::ErrorBody;

/// Failure outcomes a service call can produce. Messages come from the
/// per-operation catalog in [`crate::messages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The requested entity is absent.
    #[error("{0}")]
    NotFound(&'static str),

    /// The remote store failed or returned an unexpected result.
    #[error("{0}")]
    Internal(&'static str),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServiceError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ServiceError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorBody::new(message, status.as_u16()))).into_response()
    }
}
