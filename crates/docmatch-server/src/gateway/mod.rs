//! HTTP gateway (Axum) for batch document comparison.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handler::compare_multiple_handler;
pub use state::HandlerState;

use docmatch_core::client::CompareBackend;

/// Text-weight blend used when the caller does not supply `weight_text`.
pub const DEFAULT_WEIGHT_TEXT: f64 = 0.5;

/// Upload cap across all file parts of one request.
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

pub fn create_router_with_state<C>(state: HandlerState<C>) -> Router
where
    C: CompareBackend + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/compare-multiple", post(compare_multiple_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer restricted to the configured front-end origin.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(600))
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
