mod pipeline_observer;
mod speech_synthesizer;
mod transcription_engine;
mod translation_client;

pub use pipeline_observer::{PipelineObserver, TracingObserver};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translation_client::{
    TranslationClient, TranslationClientError, TranslationClientFactory,
};
