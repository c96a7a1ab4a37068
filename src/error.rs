// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reqwest::StatusCode as UpstreamStatus;

use crate::message::ErrorResponse;

/// Failure talking to a third-party API.
#[derive(thiserror::Error, Debug)]
pub enum UpstreamError {
    #[error("{0} API key is not configured")]
    MissingCredential(&'static str),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status { status: UpstreamStatus, body: String },

    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("speech synthesis failed: {0}")]
    TtsFailed(UpstreamError),

    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("unreadable request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::TtsFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TTS failed".to_string()),
            AppError::Upstream(_) | AppError::Body(_) | AppError::Json(_) | AppError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        // Only the generic message leaves the process.
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
