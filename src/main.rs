use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use careease_backend::config::Config;
use careease_backend::routes::{cors_layer, create_router};
use careease_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    if config.chat_api_key.is_none() {
        warn!("GROQ_API_KEY is not set; /ask-ai will fail until it is configured");
    }
    if config.speech_api_key().is_none() {
        warn!("ELEVEN_API_KEY is not set; /speak will tell clients to use browser speech");
    }

    let cors = cors_layer(&config.allowed_origin)
        .with_context(|| format!("invalid CORS_ORIGIN: {}", config.allowed_origin))?;
    let addr = config.bind_addr;

    let state = Arc::new(AppState::new(config));
    state
        .audio
        .ensure_dir()
        .await
        .with_context(|| format!("failed to create upload folder {}", state.audio.dir().display()))?;

    info!("upload folder: {}", state.audio.dir().display());
    info!("allowed origin: {}", state.config.allowed_origin);

    let app = create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to address: {}", addr))?;

    info!("CareEase backend running at http://{}", addr);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
