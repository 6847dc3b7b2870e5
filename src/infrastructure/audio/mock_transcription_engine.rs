use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Scaffold engine: answers every payload with the same sentence.
pub struct MockTranscriptionEngine {
    transcript: String,
}

impl MockTranscriptionEngine {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

impl Default for MockTranscriptionEngine {
    fn default() -> Self {
        Self::new("Hello, how are you today?")
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError> {
        if audio_data.is_empty() {
            return Err(TranscriptionError::InvalidAudio("empty payload".to_string()));
        }
        Ok(self.transcript.clone())
    }
}
