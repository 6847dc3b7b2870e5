mod audio_resource;
mod pipeline_request;
mod pipeline_result;
mod pipeline_stage;
mod retry_state;
mod translation_target;

pub use audio_resource::{AudioResource, AudioResourceError};
pub use pipeline_request::PipelineRequest;
pub use pipeline_result::PipelineResult;
pub use pipeline_stage::PipelineStage;
pub use retry_state::RetryState;
pub use translation_target::{InvalidTarget, TranslationTarget};
