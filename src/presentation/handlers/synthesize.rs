use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use base64::Engine;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};

use crate::domain::TranslationTarget;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Deserialize)]
pub struct SynthesizeRequest {
    pub text: Option<String>,
    pub language: Option<String>,
}

#[derive(Serialize)]
pub struct SynthesizeResponse {
    /// Base64 (standard alphabet) encoded audio.
    pub audio: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn synthesize_handler(
    State(state): State<AppState>,
    payload: Result<Json<SynthesizeRequest>, JsonRejection>,
) -> Result<Json<SynthesizeResponse>, ApiError> {
    let Json(request) = payload?;

    let text = request
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::invalid_input("Text is required"))?;
    let language = TranslationTarget::parse(request.language.as_deref().unwrap_or_default())
        .map_err(|_| ApiError::invalid_input("Language is required"))?;

    let audio = state.orchestrator.run_synthesis(&text, &language).await?;

    Ok(Json(SynthesizeResponse {
        audio: general_purpose::STANDARD.encode(audio),
    }))
}
