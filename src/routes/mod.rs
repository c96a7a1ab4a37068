// src/routes/mod.rs
pub mod ask;
pub mod speak;

use crate::state::SharedState;
use axum::{
    Router,
    http::{HeaderValue, Method, header, header::InvalidHeaderValue},
    routing::{get, post},
};
use ask::ask_ai_handler;
use serde_json::Value;
use speak::speak_handler;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/ask-ai", post(ask_ai_handler))
        .route("/speak", post(speak_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}

/// A string field that must be present and non-empty before anything else is read.
fn required_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Cross-origin access for the one configured frontend origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}
