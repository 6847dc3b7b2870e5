use async_trait::async_trait;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::TranslationTarget;

use super::language_tag::validate_language;

const SAMPLE_RATE: u32 = 16_000;
/// 30 seconds at 10ms per character.
const MAX_CLIP_CHARS: usize = 3_000;

/// Scaffold synthesizer: returns a short silent mono WAV clip.
pub struct MockSpeechSynthesizer;

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: &TranslationTarget,
    ) -> Result<Vec<u8>, SynthesisError> {
        validate_language(language)?;
        // 10ms of silence per character, up to MAX_CLIP_CHARS.
        let chars = text.chars().count().clamp(1, MAX_CLIP_CHARS) as u32;
        let samples = chars * SAMPLE_RATE / 100;
        Ok(silent_wav(samples))
    }
}

fn silent_wav(samples: u32) -> Vec<u8> {
    let data_len = samples * 2;
    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVEfmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.resize(44 + data_len as usize, 0);
    wav
}
