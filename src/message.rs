// src/message.rs
use serde::{Deserialize, Serialize};

/// One entry of the list sent to the chat-completion API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role: role.into(), content: content.into() }
    }
}

/// A prior turn as the frontend sends it; `type` is passed through as the role.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HistoryItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl From<HistoryItem> for ChatMessage {
    fn from(item: HistoryItem) -> Self {
        ChatMessage { role: item.kind, content: item.content }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub history: Vec<HistoryItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Sent instead of audio when no speech credential is configured.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechFallback {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
