use std::sync::Arc;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};

use super::google_tts_client::GoogleTtsClient;
use super::mock_speech_synthesizer::MockSpeechSynthesizer;
use super::openai_speech_client::OpenAiSpeechClient;

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisProvider {
    Google,
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

pub struct SpeechSynthesizerFactory;

impl SpeechSynthesizerFactory {
    pub fn create(
        provider: SynthesisProvider,
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
        voice: Option<String>,
    ) -> Result<Arc<dyn SpeechSynthesizer>, SynthesisError> {
        match provider {
            SynthesisProvider::Google => Ok(Arc::new(GoogleTtsClient::new(base_url))),
            SynthesisProvider::OpenAi => {
                let key = api_key.ok_or_else(|| {
                    SynthesisError::Configuration(
                        "API key required for OpenAI speech".to_string(),
                    )
                })?;
                Ok(Arc::new(OpenAiSpeechClient::new(key, base_url, model, voice)))
            }
            SynthesisProvider::Mock => Ok(Arc::new(MockSpeechSynthesizer)),
        }
    }
}
