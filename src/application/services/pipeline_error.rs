use crate::application::ports::{SynthesisError, TranscriptionError};

/// Classified failure surfaced by every pipeline operation.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailure(String),
    #[error("translation failed after {attempts} attempts: {message}")]
    TranslationFailed { attempts: u32, message: String },
    #[error("translation service unavailable after {attempts} attempts: {message}")]
    TranslationServiceUnavailable { attempts: u32, message: String },
    #[error("speech synthesis failed: {0}")]
    SynthesisFailure(String),
    #[error("failed to release audio artifact: {0}")]
    ResourceCleanupFailure(String),
}

impl PipelineError {
    /// Stable, machine-checkable identifier for the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::InvalidInput(_) => "invalid_input",
            PipelineError::TranscriptionFailure(_) => "transcription_failure",
            PipelineError::TranslationFailed { .. } => "translation_failed",
            PipelineError::TranslationServiceUnavailable { .. } => {
                "translation_service_unavailable"
            }
            PipelineError::SynthesisFailure(_) => "synthesis_failure",
            PipelineError::ResourceCleanupFailure(_) => "resource_cleanup_failure",
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, PipelineError::InvalidInput(_))
    }
}

impl From<TranscriptionError> for PipelineError {
    fn from(e: TranscriptionError) -> Self {
        PipelineError::TranscriptionFailure(e.to_string())
    }
}

impl From<SynthesisError> for PipelineError {
    fn from(e: SynthesisError) -> Self {
        PipelineError::SynthesisFailure(e.to_string())
    }
}
