// Presentation layer - HTTP routing and handlers
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_weather, health_check};
use axum::{Router, routing::get};
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Requests exceeding `request_timeout` are answered with 408 and their
/// in-flight upstream fetches dropped.
pub fn build_router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/weather", get(get_weather))
        .layer((TraceLayer::new_for_http(), TimeoutLayer::new(request_timeout)))
        .with_state(state)
}
