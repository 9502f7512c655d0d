//! Shared-secret `apikey` header authentication.
//!
//! Guards all schedule/task routes, evaluated once per request before any
//! handler logic. Stateless beyond the configured key set.
//!
//! Behavior:
//! - Header absent or empty: 403 with the fixed missing-credentials body
//! - Header present but not a permissible key: 403 "Invalid API Key provided"
//! - Match: request proceeds unmodified

use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::server::AppState;

/// Outcome of checking the `apikey` header against the permissible key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyCheck {
    Missing,
    Invalid,
    Valid,
}

/// Check a request's `apikey` header against the permissible keys
/// (constant-time via SHA-256).
pub fn check_api_key(permissible_keys: &[String], headers: &HeaderMap) -> ApiKeyCheck {
    let Some(provided) = headers.get("apikey").and_then(|v| v.to_str().ok()) else {
        return ApiKeyCheck::Missing;
    };

    if provided.is_empty() {
        return ApiKeyCheck::Missing;
    }

    let provided_digest = Sha256::digest(provided.as_bytes());
    let matched = permissible_keys
        .iter()
        .any(|key| Sha256::digest(key.as_bytes()) == provided_digest);

    if matched {
        ApiKeyCheck::Valid
    } else {
        ApiKeyCheck::Invalid
    }
}

fn missing_credentials_response() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({
            "message": ["Required security credentials are missing or expired [apiKey]"],
            "error": "Missing required security credentials",
            "statusCode": 403,
        })),
    )
        .into_response()
}

fn invalid_key_response() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "message": "Invalid API Key provided" })),
    )
        .into_response()
}

/// Middleware that guards the schedule/task routes.
///
/// Uses the key set from `AppState` (currently exactly one configured key).
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    match check_api_key(&state.api_keys, request.headers()) {
        ApiKeyCheck::Valid => next.run(request).await,
        ApiKeyCheck::Missing => missing_credentials_response(),
        ApiKeyCheck::Invalid => {
            warn!("API key mismatch");
            invalid_key_response()
        }
    }
}
