use std::sync::Arc;

use crate::application::ports::TranscriptionEngine;
use crate::domain::AudioResource;

use super::pipeline_error::PipelineError;

/// Speech-to-text stage. Reads the audio resource but never releases it;
/// ownership stays with the caller.
pub struct Transcriber {
    engine: Arc<dyn TranscriptionEngine>,
}

impl Transcriber {
    pub fn new(engine: Arc<dyn TranscriptionEngine>) -> Self {
        Self { engine }
    }

    #[tracing::instrument(skip(self, audio), fields(bytes = audio.len()))]
    pub async fn transcribe(&self, audio: &AudioResource) -> Result<String, PipelineError> {
        let data = audio.read_bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read audio resource");
            PipelineError::TranscriptionFailure(e.to_string())
        })?;

        let transcript = self.engine.transcribe(&data).await.map_err(|e| {
            tracing::error!(error = %e, "Transcription engine failed");
            PipelineError::from(e)
        })?;

        let transcript = transcript.trim();
        if transcript.is_empty() {
            tracing::warn!("Transcription engine returned no text");
            return Err(PipelineError::TranscriptionFailure(
                "no speech recognized".to_string(),
            ));
        }

        tracing::info!(chars = transcript.len(), "Transcription completed");
        Ok(transcript.to_string())
    }
}
