use axum::Json;
use axum::extract::{Multipart, State};
use base64::Engine;
use base64::engine::general_purpose;
use serde::Serialize;

use crate::presentation::state::AppState;

use super::error::ApiError;
use super::upload::AudioUpload;

#[derive(Serialize)]
pub struct TranslateSpeechResponse {
    pub original_text: String,
    pub translated_text: String,
    pub audio: String,
}

/// Full pipeline: transcribe the upload, translate it, speak the result.
#[tracing::instrument(skip(state, multipart))]
pub async fn translate_speech_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TranslateSpeechResponse>, ApiError> {
    let mut upload = AudioUpload::read(multipart).await?;
    let audio = upload.require_audio()?;
    let target = upload
        .target_language
        .take()
        .ok_or_else(|| ApiError::invalid_input("Target language is required"))?;

    let request = state.orchestrator.prepare_request(audio, &target).await?;
    let result = state.orchestrator.run_full_pipeline(request).await?;

    Ok(Json(TranslateSpeechResponse {
        original_text: result.original_text,
        translated_text: result.translated_text,
        audio: general_purpose::STANDARD.encode(result.audio),
    }))
}
