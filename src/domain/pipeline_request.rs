use super::audio_resource::AudioResource;
use super::translation_target::TranslationTarget;

/// Input to a full speech translation run. Built only after the payload and
/// the target language have been validated.
#[derive(Debug)]
pub struct PipelineRequest {
    audio: AudioResource,
    target: TranslationTarget,
}

impl PipelineRequest {
    pub fn new(audio: AudioResource, target: TranslationTarget) -> Self {
        Self { audio, target }
    }

    pub fn audio(&self) -> &AudioResource {
        &self.audio
    }

    pub fn target(&self) -> &TranslationTarget {
        &self.target
    }

    pub fn into_parts(self) -> (AudioResource, TranslationTarget) {
        (self.audio, self.target)
    }
}
