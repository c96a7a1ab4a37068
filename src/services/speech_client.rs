// src/services/speech_client.rs
use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;

use crate::config::{VOICE_ID, VOICE_SIMILARITY_BOOST, VOICE_STABILITY};
use crate::error::UpstreamError;

#[async_trait]
pub trait SpeechSynthesis: Send + Sync {
    /// Raw encoded audio for `text`.
    async fn synthesize(&self, text: &str) -> Result<Bytes, UpstreamError>;
}

#[derive(Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[derive(Serialize)]
struct SpeechPayload<'a> {
    text: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Clone, Debug)]
pub struct ElevenLabsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ElevenLabsClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self { http, base_url: base_url.into(), api_key }
    }
}

#[async_trait]
impl SpeechSynthesis for ElevenLabsClient {
    async fn synthesize(&self, text: &str) -> Result<Bytes, UpstreamError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredential("ElevenLabs"))?;

        let url = format!(
            "{}/text-to-speech/{}",
            self.base_url.trim_end_matches('/'),
            VOICE_ID
        );
        debug!(%url, chars = text.len(), "requesting speech");

        let resp = self
            .http
            .post(&url)
            .header("xi-api-key", api_key)
            .json(&SpeechPayload {
                text,
                voice_settings: VoiceSettings {
                    stability: VOICE_STABILITY,
                    similarity_boost: VOICE_SIMILARITY_BOOST,
                },
            })
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UpstreamError::Status { status, body });
        }

        Ok(resp.bytes().await?)
    }
}
