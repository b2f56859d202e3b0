//! HTTP gateway (Axum) for the scoring endpoint.
//!
//! This module is primarily used by the `verdant` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use handler::predict_handler;
pub use state::HandlerState;

/// Response header carrying the request outcome.
pub const VERDANT_STATUS_HEADER: &str = "x-verdant-status";

pub const VERDANT_STATUS_HEALTHY: &str = "healthy";
pub const VERDANT_STATUS_READY: &str = "ready";
pub const VERDANT_STATUS_SCORED: &str = "scored";

const INDEX_HTML: &str = include_str!("index.html");

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/predict", post(predict_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub model: &'static str,
    pub model_mode: &'static str,
    pub model_path: Option<String>,
}

#[tracing::instrument]
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        VERDANT_STATUS_HEADER,
        HeaderValue::from_static(VERDANT_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let model_mode = if state.scorer.is_model_loaded() {
        "real"
    } else {
        "stub"
    };

    let components = ComponentStatus {
        http: VERDANT_STATUS_READY,
        // The scorer either loaded at startup or the process never came up.
        model: VERDANT_STATUS_READY,
        model_mode,
        model_path: state.model_path.as_ref().map(|p| p.display().to_string()),
    };

    let mut headers = HeaderMap::new();
    headers.insert(VERDANT_STATUS_HEADER, HeaderValue::from_static("ok"));

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
