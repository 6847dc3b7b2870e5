use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::presentation::state::AppState;

use super::error::ApiError;
use super::upload::AudioUpload;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let audio = AudioUpload::read(multipart).await?.require_audio()?;

    let resource = state.orchestrator.stage_audio(audio).await?;
    let text = state.orchestrator.run_transcription(resource).await?;

    Ok(Json(TranscribeResponse { text }))
}
