// src/services/audio_store.rs
use std::path::{Path, PathBuf};

use axum::body::Bytes;
use tracing::warn;
use uuid::Uuid;

/// Synthesized audio on disk. Every save gets its own file, so concurrent
/// requests never read each other's output, and every file is removed once
/// it has been read back.
#[derive(Clone, Debug)]
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Write `audio` to a fresh `speech-<uuid>.mp3` and return its path.
    pub async fn save(&self, audio: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.dir.join(format!("speech-{}.mp3", Uuid::new_v4()));
        tokio::fs::write(&path, audio).await?;
        Ok(path)
    }

    /// Read a saved file back and delete it, whether or not the read succeeded.
    pub async fn take(&self, path: &Path) -> std::io::Result<Bytes> {
        let audio = tokio::fs::read(path).await;
        if let Err(e) = tokio::fs::remove_file(path).await {
            warn!(path = %path.display(), "failed to remove served audio: {}", e);
        }
        Ok(Bytes::from(audio?))
    }
}
