use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::domain::TranslationTarget;
use crate::infrastructure::observability::sanitize_text;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub target_language: Option<String>,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn translate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Json(request) = payload?;

    let text = request
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::invalid_input("Text is required"))?;
    let target = TranslationTarget::parse(request.target_language.as_deref().unwrap_or_default())
        .map_err(|_| ApiError::invalid_input("Target language is required"))?;

    tracing::debug!(text = %sanitize_text(&text), language = %target, "Processing translation");

    let translated_text = state.orchestrator.run_translation(&text, &target).await?;

    Ok(Json(TranslateResponse { translated_text }))
}
