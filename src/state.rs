// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::audio_store::AudioStore;
use crate::services::chat_client::{ChatCompletion, GroqClient};
use crate::services::speech_client::{ElevenLabsClient, SpeechSynthesis};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub chat: Arc<dyn ChatCompletion>,
    pub speech: Arc<dyn SpeechSynthesis>,
    pub audio: AudioStore,
}

impl AppState {
    /// Wire the real upstream clients from `config`.
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::new();
        let chat = GroqClient::new(http.clone(), &config.chat_base_url, config.chat_api_key.clone());
        let speech = ElevenLabsClient::new(
            http,
            &config.speech_base_url,
            config.speech_api_key().map(str::to_string),
        );
        Self::with_clients(config, Arc::new(chat), Arc::new(speech))
    }

    pub fn with_clients(
        config: Config,
        chat: Arc<dyn ChatCompletion>,
        speech: Arc<dyn SpeechSynthesis>,
    ) -> Self {
        let audio = AudioStore::new(config.upload_dir.clone());
        Self { config, chat, speech, audio }
    }
}
