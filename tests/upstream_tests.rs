use careease_backend::error::UpstreamError;
use careease_backend::message::ChatMessage;
use careease_backend::services::chat_client::{ChatCompletion, GroqClient};
use careease_backend::services::speech_client::{ElevenLabsClient, SpeechSynthesis};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn groq_client_returns_first_choice() {
    let server = MockServer::start().await;

    let messages = vec![
        ChatMessage::new("system", "be kind"),
        ChatMessage::new("user", "hello"),
    ];

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer groq-key"))
        .and(body_json(json!({
            "model": "llama3-8b-8192",
            "messages": [
                {"role": "system", "content": "be kind"},
                {"role": "user", "content": "hello"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Hi there!"}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GroqClient::new(reqwest::Client::new(), server.uri(), Some("groq-key".into()));
    let answer = client.complete("llama3-8b-8192", &messages).await.unwrap();
    assert_eq!(answer, "Hi there!");
}

#[tokio::test]
async fn groq_client_reports_empty_choices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let client = GroqClient::new(reqwest::Client::new(), server.uri(), Some("k".into()));
    let err = client.complete("m", &[]).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Malformed(_)));
}

#[tokio::test]
async fn groq_client_surfaces_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = GroqClient::new(reqwest::Client::new(), server.uri(), Some("bad".into()));
    match client.complete("m", &[]).await.unwrap_err() {
        UpstreamError::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn groq_client_without_key_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = GroqClient::new(reqwest::Client::new(), server.uri(), None);
    let err = client.complete("m", &[]).await.unwrap_err();
    assert!(matches!(err, UpstreamError::MissingCredential(_)));
}

#[tokio::test]
async fn eleven_labs_client_posts_voice_settings() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text-to-speech/EXAVITQu4vr4xnSDxMaL"))
        .and(header("xi-api-key", "eleven-key"))
        .and(body_json(json!({
            "text": "Good morning",
            "voice_settings": {"stability": 0.5, "similarity_boost": 0.75}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/mpeg")
                .set_body_bytes(b"ID3mp3data".to_vec()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ElevenLabsClient::new(reqwest::Client::new(), server.uri(), Some("eleven-key".into()));
    let audio = client.synthesize("Good morning").await.unwrap();
    assert_eq!(&audio[..], b"ID3mp3data");
}

#[tokio::test]
async fn eleven_labs_client_treats_non_200_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
        .mount(&server)
        .await;

    let client = ElevenLabsClient::new(reqwest::Client::new(), server.uri(), Some("k".into()));
    let err = client.synthesize("hi").await.unwrap_err();
    assert!(matches!(err, UpstreamError::Status { .. }));
}
