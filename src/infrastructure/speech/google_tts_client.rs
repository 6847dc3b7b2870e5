use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::TranslationTarget;

use super::language_tag::validate_language;

/// Longest text the `translate_tts` endpoint accepts in one request.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Google Translate's public text-to-speech endpoint. Long text is split
/// into pieces and the returned MP3 streams are concatenated.
pub struct GoogleTtsClient {
    client: Client,
    base_url: String,
}

impl GoogleTtsClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| "https://translate.google.com".to_string()),
        }
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, SynthesisError> {
        let textlen = chunk.chars().count().to_string();
        let idx = index.to_string();
        let total = total.to_string();

        let response = self
            .client
            .get(format!("{}/translate_tts", self.base_url))
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", chunk),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("body: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsClient {
    async fn synthesize(
        &self,
        text: &str,
        language: &TranslationTarget,
    ) -> Result<Vec<u8>, SynthesisError> {
        validate_language(language)?;

        let chunks = split_text(text, MAX_CHUNK_CHARS);
        tracing::debug!(
            language = %language,
            chunks = chunks.len(),
            "Requesting speech from Google TTS"
        );

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let part = self
                .fetch_chunk(chunk, language.as_str(), index, chunks.len())
                .await?;
            audio.extend_from_slice(&part);
        }

        tracing::info!(bytes = audio.len(), "Google TTS synthesis completed");
        Ok(audio)
    }
}

/// Greedy word-boundary split. Words longer than `max_chars` are cut on
/// character boundaries.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
