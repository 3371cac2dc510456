//! Router assembly and middleware layers.

use std::time::Duration;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use recap_settings::ServerSettings;

use crate::context::AppContext;
use crate::handlers::process_file;
use crate::metrics;

/// Build the application router.
///
/// Body size and request timeout limits come from settings; processing is
/// otherwise unbounded per request (no queueing, no admission control),
/// matching the single-request synchronous model.
///
/// CORS is allow-all: the service fronts browser clients on arbitrary
/// origins and carries no cookie-based auth, so there is nothing for the
/// policy to protect.
pub fn build_router(ctx: AppContext, settings: &ServerSettings) -> Router {
    Router::new()
        .route("/process-file", post(process_file))
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(settings.max_upload_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            settings.request_timeout_secs,
        )))
        .with_state(ctx)
}

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Prometheus exposition endpoint.
async fn metrics_text(State(ctx): State<AppContext>) -> Response {
    match ctx.metrics {
        Some(handle) => metrics::render(&handle).into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed",
        )
            .into_response(),
    }
}
