//! Router assembly and shared application state.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::service::{ScheduleService, TaskService};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state. Built once in the composition root; services own
/// their store handle for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub schedules: ScheduleService,
    pub tasks: TaskService,
    /// Permissible `apikey` header values (currently exactly one).
    pub api_keys: Arc<Vec<String>>,
}

// ============================================================================
// Server Setup
// ============================================================================

pub fn build_app(state: AppState, request_timeout_seconds: u64, max_connections: usize) -> Router {
    let schedule_routes = Router::new()
        .route(
            "/schedule",
            post(handlers::schedule::create).put(handlers::schedule::update),
        )
        .route("/schedule/all", get(handlers::schedule::fetch_all))
        .route(
            "/schedule/{id}",
            get(handlers::schedule::fetch).delete(handlers::schedule::delete),
        );

    let task_routes = Router::new()
        .route(
            "/task",
            post(handlers::task::create).put(handlers::task::update),
        )
        .route("/task/all", get(handlers::task::fetch_all))
        .route(
            "/task/{id}",
            get(handlers::task::fetch).delete(handlers::task::delete),
        );

    let protected = Router::new()
        .merge(schedule_routes)
        .merge(task_routes)
        .with_state(state.clone())
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1 MB
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            handlers::api_auth::require_api_key,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_seconds),
        ))
        .layer(ConcurrencyLimitLayer::new(max_connections));

    Router::new()
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .route("/version", get(handlers::version))
        .merge(protected)
}
