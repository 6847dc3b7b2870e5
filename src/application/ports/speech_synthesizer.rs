use async_trait::async_trait;

use crate::domain::TranslationTarget;

/// Text-to-speech capability. `language` selects the spoken voice.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        language: &TranslationTarget,
    ) -> Result<Vec<u8>, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("engine configuration: {0}")]
    Configuration(String),
}
