use crate::domain::PipelineStage;

/// Receives every state transition of a full pipeline run.
pub trait PipelineObserver: Send + Sync {
    fn on_stage(&self, stage: PipelineStage);
}

pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage(&self, stage: PipelineStage) {
        tracing::debug!(stage = %stage, "Pipeline stage changed");
    }
}
