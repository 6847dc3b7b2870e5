use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::SpeechSynthesizer;
use crate::domain::{AudioResource, TranslationTarget};

use super::pipeline_error::PipelineError;

/// Text-to-speech stage. Every call produces a new artifact in the scratch
/// directory; the caller owns it and must release it.
pub struct Synthesizer {
    engine: Arc<dyn SpeechSynthesizer>,
    scratch_dir: PathBuf,
}

impl Synthesizer {
    pub fn new(engine: Arc<dyn SpeechSynthesizer>, scratch_dir: PathBuf) -> Self {
        Self {
            engine,
            scratch_dir,
        }
    }

    #[tracing::instrument(skip(self, text, language), fields(language = %language, chars = text.len()))]
    pub async fn synthesize(
        &self,
        text: &str,
        language: &TranslationTarget,
    ) -> Result<AudioResource, PipelineError> {
        let audio = self.engine.synthesize(text, language).await.map_err(|e| {
            tracing::error!(error = %e, "Speech synthesis engine failed");
            PipelineError::from(e)
        })?;

        if audio.is_empty() {
            tracing::warn!("Speech synthesis engine returned no audio");
            return Err(PipelineError::SynthesisFailure(
                "engine produced no audio".to_string(),
            ));
        }

        let resource = AudioResource::materialize_async(self.scratch_dir.clone(), audio)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to write synthesized audio");
                PipelineError::SynthesisFailure(e.to_string())
            })?;

        tracing::info!(bytes = resource.len(), "Speech synthesis completed");
        Ok(resource)
    }
}
