mod helpers;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;

use parlance::application::ports::{TranscriptionEngine, TranscriptionError};
use parlance::infrastructure::audio::{
    AzureWhisperEngine, OpenAiWhisperEngine, TranscriptionEngineFactory, TranscriptionProvider,
};

use helpers::{serve, wav_bytes};

fn canned(route: &'static str, status: u16, body: &'static str) -> Router {
    Router::new().route(
        route,
        post(move || async move {
            let status = StatusCode::from_u16(status).unwrap();
            (status, body).into_response()
        }),
    )
}

#[tokio::test]
async fn given_valid_audio_when_azure_transcribes_then_returns_text() {
    let (base_url, shutdown_tx) = serve(canned(
        "/openai/deployments/my-deployment/audio/transcriptions",
        200,
        r#"{"text": " Hello from Azure Whisper "}"#,
    ))
    .await;

    let engine = AzureWhisperEngine::new(&base_url, "my-deployment", "test-key", "2024-06-01");
    let result = engine.transcribe(&wav_bytes()).await;

    assert_eq!(result.unwrap(), "Hello from Azure Whisper");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_azure_rejects_audio_when_transcribing_then_returns_invalid_audio() {
    let (base_url, shutdown_tx) = serve(canned(
        "/openai/deployments/my-deployment/audio/transcriptions",
        400,
        r#"{"error": {"code": "InvalidRequest", "message": "bad audio"}}"#,
    ))
    .await;

    let engine = AzureWhisperEngine::new(&base_url, "my-deployment", "test-key", "2024-06-01");
    let result = engine.transcribe(b"bad audio").await;

    assert!(matches!(result, Err(TranscriptionError::InvalidAudio(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_openai_returns_json_when_transcribing_then_returns_text() {
    let (base_url, shutdown_tx) = serve(canned(
        "/v1/audio/transcriptions",
        200,
        r#"{"text": "Where is the train station?"}"#,
    ))
    .await;

    let engine = OpenAiWhisperEngine::new(
        "test-key".to_string(),
        Some(format!("{}/v1", base_url)),
        None,
    );
    let result = engine.transcribe(&wav_bytes()).await;

    assert_eq!(result.unwrap(), "Where is the train station?");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_openai_server_error_when_transcribing_then_returns_api_error() {
    let (base_url, shutdown_tx) =
        serve(canned("/v1/audio/transcriptions", 503, "overloaded")).await;

    let engine = OpenAiWhisperEngine::new(
        "test-key".to_string(),
        Some(format!("{}/v1", base_url)),
        None,
    );
    let result = engine.transcribe(&wav_bytes()).await;

    assert!(matches!(result, Err(TranscriptionError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_openai_returns_html_when_transcribing_then_returns_invalid_response() {
    let (base_url, shutdown_tx) =
        serve(canned("/v1/audio/transcriptions", 200, "<html>oops</html>")).await;

    let engine = OpenAiWhisperEngine::new(
        "test-key".to_string(),
        Some(format!("{}/v1", base_url)),
        None,
    );
    let result = engine.transcribe(&wav_bytes()).await;

    assert!(matches!(result, Err(TranscriptionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[test]
fn given_openai_provider_without_key_when_creating_engine_then_configuration_error() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::OpenAi,
        "whisper-1",
        None,
        None,
    );

    assert!(matches!(result, Err(TranscriptionError::Configuration(_))));
}

#[test]
fn given_azure_provider_without_base_url_when_creating_engine_then_configuration_error() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::Azure,
        "whisper",
        Some("key".to_string()),
        None,
    );

    assert!(matches!(result, Err(TranscriptionError::Configuration(_))));
}

#[tokio::test]
async fn given_mock_provider_when_transcribing_then_returns_canned_sentence() {
    let engine =
        TranscriptionEngineFactory::create(TranscriptionProvider::Mock, "", None, None).unwrap();

    let text = engine.transcribe(&wav_bytes()).await.unwrap();

    assert!(!text.is_empty());
}
