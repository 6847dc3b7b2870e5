use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{PipelineObserver, TracingObserver};
use crate::domain::{
    AudioResource, AudioResourceError, PipelineRequest, PipelineResult, PipelineStage,
    TranslationTarget,
};

use super::pipeline_error::PipelineError;
use super::synthesizer::Synthesizer;
use super::transcriber::Transcriber;
use super::translator::Translator;

/// Composes transcription, translation and synthesis.
///
/// Every operation that owns an [`AudioResource`] releases it before
/// returning, whatever the outcome. Stage failures are propagated unchanged
/// and no partial result is ever returned.
pub struct PipelineOrchestrator {
    transcriber: Transcriber,
    translator: Translator,
    synthesizer: Synthesizer,
    scratch_dir: PathBuf,
    observer: Arc<dyn PipelineObserver>,
}

impl PipelineOrchestrator {
    pub fn new(
        transcriber: Transcriber,
        translator: Translator,
        synthesizer: Synthesizer,
        scratch_dir: PathBuf,
    ) -> Self {
        Self {
            transcriber,
            translator,
            synthesizer,
            scratch_dir,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// Writes an uploaded payload to the scratch directory.
    pub async fn stage_audio(&self, audio: Vec<u8>) -> Result<AudioResource, PipelineError> {
        if audio.is_empty() {
            return Err(PipelineError::InvalidInput("audio payload is empty".to_string()));
        }

        AudioResource::materialize_async(self.scratch_dir.clone(), audio)
            .await
            .map_err(|e| match e {
                AudioResourceError::Empty => PipelineError::InvalidInput(e.to_string()),
                other => {
                    tracing::error!(error = %other, "Failed to stage uploaded audio");
                    PipelineError::TranscriptionFailure(other.to_string())
                }
            })
    }

    /// Validates raw inputs and builds a request. Nothing is written to disk
    /// unless both the payload and the target are acceptable.
    pub async fn prepare_request(
        &self,
        audio: Vec<u8>,
        target: &str,
    ) -> Result<PipelineRequest, PipelineError> {
        let target = TranslationTarget::parse(target)
            .map_err(|e| PipelineError::InvalidInput(e.to_string()))?;
        let audio = self.stage_audio(audio).await?;
        Ok(PipelineRequest::new(audio, target))
    }

    pub async fn run_transcription(&self, audio: AudioResource) -> Result<String, PipelineError> {
        let outcome = self.transcriber.transcribe(&audio).await;
        release(audio);
        outcome
    }

    pub async fn run_translation(
        &self,
        text: &str,
        target: &TranslationTarget,
    ) -> Result<String, PipelineError> {
        require_text(text)?;
        self.translator.translate(text, target).await
    }

    /// Synthesizes speech and hands back plain bytes; the intermediate
    /// artifact never leaves this call.
    pub async fn run_synthesis(
        &self,
        text: &str,
        target: &TranslationTarget,
    ) -> Result<Vec<u8>, PipelineError> {
        require_text(text)?;
        let artifact = self.synthesizer.synthesize(text, target).await?;
        drain(artifact).await
    }

    #[tracing::instrument(skip(self, request), fields(language = %request.target()))]
    pub async fn run_full_pipeline(
        &self,
        request: PipelineRequest,
    ) -> Result<PipelineResult, PipelineError> {
        let (audio, target) = request.into_parts();
        self.observer.on_stage(PipelineStage::Received);

        let outcome = self.execute(&audio, &target).await;
        release(audio);

        match &outcome {
            Ok(result) => {
                self.observer.on_stage(PipelineStage::Completed);
                tracing::info!(audio_bytes = result.audio.len(), "Speech translation completed");
            }
            Err(e) => {
                self.observer.on_stage(PipelineStage::Failed);
                tracing::warn!(kind = e.kind(), error = %e, "Speech translation failed");
            }
        }

        outcome
    }

    async fn execute(
        &self,
        audio: &AudioResource,
        target: &TranslationTarget,
    ) -> Result<PipelineResult, PipelineError> {
        self.observer.on_stage(PipelineStage::Transcribing);
        let original_text = self.transcriber.transcribe(audio).await?;

        self.observer.on_stage(PipelineStage::Translating);
        let translated_text = self.translator.translate(&original_text, target).await?;

        self.observer.on_stage(PipelineStage::Synthesizing);
        let artifact = self.synthesizer.synthesize(&translated_text, target).await?;
        let audio = drain(artifact).await?;

        Ok(PipelineResult {
            original_text,
            translated_text,
            audio,
        })
    }
}

fn require_text(text: &str) -> Result<(), PipelineError> {
    if text.trim().is_empty() {
        return Err(PipelineError::InvalidInput("text is required".to_string()));
    }
    Ok(())
}

async fn drain(artifact: AudioResource) -> Result<Vec<u8>, PipelineError> {
    let bytes = artifact.read_bytes().await;
    release(artifact);
    bytes.map_err(|e| PipelineError::SynthesisFailure(e.to_string()))
}

/// Cleanup failures are logged and never replace the operation's outcome.
fn release(resource: AudioResource) {
    let path = resource.path().to_path_buf();
    if let Err(e) = resource.release() {
        let error = PipelineError::ResourceCleanupFailure(e.to_string());
        tracing::warn!(
            kind = error.kind(),
            path = %path.display(),
            error = %error,
            "Audio artifact cleanup failed"
        );
    }
}
