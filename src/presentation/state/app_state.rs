use std::sync::Arc;

use crate::application::services::PipelineOrchestrator;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<PipelineOrchestrator>,
    pub max_upload_bytes: usize,
}
