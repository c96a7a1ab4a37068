pub mod audio_store;
pub mod chat_client;
pub mod prompt;
pub mod speech_client;
