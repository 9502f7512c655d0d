//! Task HTTP handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::dto::{TaskCreateDto, TaskUpdateDto};
use crate::server::AppState;
use crate::validate::{validate_path_id, ValidationRejection};

/// POST /task
///
/// Creation reports store failure through the envelope (`success: false`)
/// rather than an error status, so both outcomes answer 201.
pub async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let dto = match TaskCreateDto::from_value(&body) {
        Ok(dto) => dto,
        Err(violations) => return ValidationRejection::from(violations).into_response(),
    };

    let envelope = state.tasks.create(dto).await;
    (StatusCode::CREATED, Json(envelope)).into_response()
}

/// GET /task/all
pub async fn fetch_all(State(state): State<AppState>) -> Response {
    match state.tasks.fetch_all().await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /task/{id}
pub async fn fetch(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match validate_path_id(&id) {
        Ok(id) => id,
        Err(violations) => return ValidationRejection::from(violations).into_response(),
    };

    match state.tasks.fetch(id).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => e.into_response(),
    }
}

/// PUT /task
pub async fn update(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let dto = match TaskUpdateDto::from_value(&body) {
        Ok(dto) => dto,
        Err(violations) => return ValidationRejection::from(violations).into_response(),
    };

    match state.tasks.update(dto).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => e.into_response(),
    }
}

/// DELETE /task/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match validate_path_id(&id) {
        Ok(id) => id,
        Err(violations) => return ValidationRejection::from(violations).into_response(),
    };

    match state.tasks.delete(id).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(e) => e.into_response(),
    }
}
