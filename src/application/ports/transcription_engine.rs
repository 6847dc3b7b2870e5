use async_trait::async_trait;

/// Speech-to-text capability. The spoken language is detected by the engine.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("unsupported or corrupt audio: {0}")]
    InvalidAudio(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("engine configuration: {0}")]
    Configuration(String),
}
