use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use tracing::info;

use super::required_str;
use crate::{
    config::CHAT_MODEL,
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::prompt::build_messages,
    state::SharedState,
};

pub async fn ask_ai_handler(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) = payload?;
    if required_str(&body, "question").is_none() {
        return Err(AppError::BadRequest("No question provided".to_string()));
    }
    // Past this point a bad body is a 500, not a missing question.
    let request: ChatRequest = serde_json::from_value(body)?;
    let question = request.question.unwrap_or_default();

    info!(history = request.history.len(), "forwarding question to chat model");
    let messages = build_messages(request.history, &question);

    let answer = state.chat.complete(CHAT_MODEL, &messages).await?;
    Ok(Json(ChatResponse { answer }))
}
