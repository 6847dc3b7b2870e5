mod pipeline_error;
mod pipeline_orchestrator;
mod synthesizer;
mod transcriber;
mod translator;

pub use pipeline_error::PipelineError;
pub use pipeline_orchestrator::PipelineOrchestrator;
pub use synthesizer::Synthesizer;
pub use transcriber::Transcriber;
pub use translator::{DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS, RetryPolicy, Translator};
