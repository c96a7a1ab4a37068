// src/services/chat_client.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::UpstreamError;
use crate::message::ChatMessage;

#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Returns the text of the first completion choice.
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, UpstreamError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat endpoint served by Groq.
#[derive(Clone, Debug)]
pub struct GroqClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GroqClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self { http, base_url: base_url.into(), api_key }
    }
}

#[async_trait]
impl ChatCompletion for GroqClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, UpstreamError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredential("Groq"))?;

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        debug!(%url, model, messages = messages.len(), "sending chat completion");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&CompletionRequest { model, messages })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UpstreamError::Status { status, body });
        }

        let completion: CompletionResponse = resp.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| UpstreamError::Malformed("completion has no choices".to_string()))
    }
}
