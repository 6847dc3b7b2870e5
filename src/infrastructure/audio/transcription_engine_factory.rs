use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::azure_whisper_engine::{AzureWhisperEngine, DEFAULT_API_VERSION};
use super::mock_transcription_engine::MockTranscriptionEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
    Mock,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// `model` is the Whisper model for OpenAI and the deployment name for
    /// Azure.
    pub fn create(
        provider: TranscriptionProvider,
        model: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match provider {
            TranscriptionProvider::OpenAi => {
                let key = api_key.ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "API key required for OpenAI Whisper".to_string(),
                    )
                })?;
                let engine = OpenAiWhisperEngine::new(key, base_url, Some(model.to_string()));
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::Azure => {
                let key = api_key.ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "API key required for Azure OpenAI Whisper".to_string(),
                    )
                })?;
                let url = base_url.ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "Base URL required for Azure OpenAI Whisper".to_string(),
                    )
                })?;
                let engine = AzureWhisperEngine::new(&url, model, &key, DEFAULT_API_VERSION);
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::Mock => Ok(Arc::new(MockTranscriptionEngine::default())),
        }
    }
}
