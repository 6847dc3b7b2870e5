use axum::extract::Multipart;

use super::error::ApiError;

pub const AUDIO_FIELD: &str = "audio";
pub const TARGET_LANGUAGE_FIELD: &str = "target_language";

/// Fields recognised in an audio upload form. Unknown fields are skipped.
#[derive(Debug, Default)]
pub struct AudioUpload {
    pub audio: Option<Vec<u8>>,
    pub target_language: Option<String>,
}

impl AudioUpload {
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut upload = AudioUpload::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some(AUDIO_FIELD) | Some("file") => {
                    let data = field.bytes().await?;
                    tracing::debug!(bytes = data.len(), "Audio upload received");
                    upload.audio = Some(data.to_vec());
                }
                Some(TARGET_LANGUAGE_FIELD) => {
                    upload.target_language = Some(field.text().await?);
                }
                other => {
                    tracing::debug!(field = ?other, "Ignoring unknown multipart field");
                }
            }
        }

        Ok(upload)
    }

    pub fn require_audio(&mut self) -> Result<Vec<u8>, ApiError> {
        match self.audio.take() {
            Some(audio) if !audio.is_empty() => Ok(audio),
            _ => Err(ApiError::invalid_input("No audio uploaded")),
        }
    }
}
