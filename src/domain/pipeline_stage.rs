use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Received,
    Transcribing,
    Translating,
    Synthesizing,
    Completed,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Received => "RECEIVED",
            PipelineStage::Transcribing => "TRANSCRIBING",
            PipelineStage::Translating => "TRANSLATING",
            PipelineStage::Synthesizing => "SYNTHESIZING",
            PipelineStage::Completed => "COMPLETED",
            PipelineStage::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Completed | PipelineStage::Failed)
    }
}

impl FromStr for PipelineStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RECEIVED" => Ok(PipelineStage::Received),
            "TRANSCRIBING" => Ok(PipelineStage::Transcribing),
            "TRANSLATING" => Ok(PipelineStage::Translating),
            "SYNTHESIZING" => Ok(PipelineStage::Synthesizing),
            "COMPLETED" => Ok(PipelineStage::Completed),
            "FAILED" => Ok(PipelineStage::Failed),
            _ => Err(format!("Invalid pipeline stage: {}", s)),
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
