use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{info, warn};

use super::required_str;
use crate::{
    error::{AppError, UpstreamError},
    message::{SpeechFallback, SpeechRequest},
    state::SharedState,
};

pub const TTS_FALLBACK_MESSAGE: &str = "TTS not available. Using browser speech.";

pub async fn speak_handler(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = payload?;
    if required_str(&body, "text").is_none() {
        return Err(AppError::BadRequest("No text provided".to_string()));
    }
    let request: SpeechRequest = serde_json::from_value(body)?;
    let text = request.text.unwrap_or_default();

    if state.config.speech_api_key().is_none() {
        warn!("ElevenLabs API key is not configured. Falling back to browser speech.");
        let fallback = SpeechFallback { message: TTS_FALLBACK_MESSAGE.to_string() };
        return Ok(Json(fallback).into_response());
    }

    let audio = state.speech.synthesize(&text).await.map_err(|e| match e {
        UpstreamError::Status { .. } => AppError::TtsFailed(e),
        other => AppError::Upstream(other),
    })?;

    let path = state.audio.save(&audio).await?;
    info!(path = %path.display(), bytes = audio.len(), "saved synthesized speech");

    let audio = state.audio.take(&path).await?;
    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response())
}
