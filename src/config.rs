// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const CHAT_MODEL: &str = "llama3-8b-8192";
pub const VOICE_ID: &str = "EXAVITQu4vr4xnSDxMaL";
pub const VOICE_STABILITY: f32 = 0.5;
pub const VOICE_SIMILARITY_BOOST: f32 = 0.75;

/// Value shipped in `.env.example`; treated the same as an unset key.
pub const SPEECH_KEY_PLACEHOLDER: &str = "your_elevenlabs_api_key_here";

const DEFAULT_CHAT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_SPEECH_BASE_URL: &str = "https://api.elevenlabs.io/v1";

#[derive(Clone, Debug)]
pub struct Config {
    pub chat_api_key: Option<String>,
    pub speech_api_key: Option<String>,
    pub upload_dir: PathBuf,
    pub allowed_origin: String,
    pub bind_addr: SocketAddr,
    pub chat_base_url: String,
    pub speech_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat_api_key: None,
            speech_api_key: None,
            upload_dir: PathBuf::from("audio"),
            allowed_origin: "http://localhost:5173".to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            chat_base_url: DEFAULT_CHAT_BASE_URL.to_string(),
            speech_base_url: DEFAULT_SPEECH_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = match get("PORT") {
            Some(p) => p
                .parse()
                .with_context(|| format!("PORT must be a number, got {p:?}"))?,
            None => defaults.bind_addr.port(),
        };
        let bind_addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .with_context(|| format!("invalid bind address {host}:{port}"))?;

        Ok(Self {
            chat_api_key: get("GROQ_API_KEY"),
            speech_api_key: get("ELEVEN_API_KEY"),
            upload_dir: get("UPLOAD_FOLDER").map(PathBuf::from).unwrap_or(defaults.upload_dir),
            allowed_origin: get("CORS_ORIGIN").unwrap_or(defaults.allowed_origin),
            bind_addr,
            chat_base_url: get("GROQ_BASE_URL").unwrap_or(defaults.chat_base_url),
            speech_base_url: get("ELEVEN_BASE_URL").unwrap_or(defaults.speech_base_url),
        })
    }

    /// The speech credential, unless it is missing or still the placeholder.
    pub fn speech_api_key(&self) -> Option<&str> {
        self.speech_api_key
            .as_deref()
            .filter(|key| *key != SPEECH_KEY_PLACEHOLDER)
    }
}
