/// Output of a successful full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    pub original_text: String,
    pub translated_text: String,
    pub audio: Vec<u8>,
}
