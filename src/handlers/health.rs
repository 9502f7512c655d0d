use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

pub async fn livez() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

#[derive(Serialize)]
pub struct ReadyzResponse {
    pub status: String,
}

pub async fn readyz() -> Json<ReadyzResponse> {
    Json(ReadyzResponse {
        status: "ok".to_string(),
    })
}
