//! Schedule HTTP handlers.
//!
//! Routing and DTO binding only: validate the raw body or path parameter,
//! delegate to the service, and return its envelope or translated error
//! verbatim.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::dto::{ScheduleCreateDto, ScheduleUpdateDto};
use crate::server::AppState;
use crate::validate::{validate_path_id, ValidationRejection};

/// POST /schedule
pub async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let dto = match ScheduleCreateDto::from_value(&body) {
        Ok(dto) => dto,
        Err(violations) => return ValidationRejection::from(violations).into_response(),
    };

    match state.schedules.create(dto).await {
        Ok(envelope) => (StatusCode::CREATED, Json(envelope)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /schedule/all
pub async fn fetch_all(State(state): State<AppState>) -> Response {
    match state.schedules.fetch_all().await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /schedule/{id}
pub async fn fetch(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match validate_path_id(&id) {
        Ok(id) => id,
        Err(violations) => return ValidationRejection::from(violations).into_response(),
    };

    match state.schedules.fetch(id).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => e.into_response(),
    }
}

/// PUT /schedule
pub async fn update(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let dto = match ScheduleUpdateDto::from_value(&body) {
        Ok(dto) => dto,
        Err(violations) => return ValidationRejection::from(violations).into_response(),
    };

    match state.schedules.update(dto).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => e.into_response(),
    }
}

/// DELETE /schedule/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match validate_path_id(&id) {
        Ok(id) => id,
        Err(violations) => return ValidationRejection::from(violations).into_response(),
    };

    match state.schedules.delete(id).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => e.into_response(),
    }
}
