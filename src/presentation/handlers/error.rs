use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Request failure rendered as a status code plus `{error, message}`.
#[derive(Debug)]
pub enum ApiError {
    Pipeline(PipelineError),
    /// Body exceeded the configured upload limit.
    PayloadTooLarge(String),
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::Pipeline(PipelineError::InvalidInput(message.into()))
    }

    /// Body rejections carry their own status; a 413 is a size problem,
    /// anything else is malformed input.
    fn rejected_body(status: StatusCode, message: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(message)
        } else {
            Self::invalid_input(message)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Pipeline(e) => e.kind(),
            ApiError::PayloadTooLarge(_) => "payload_too_large",
        }
    }

    pub fn status(&self) -> StatusCode {
        let error = match self {
            ApiError::Pipeline(e) => e,
            ApiError::PayloadTooLarge(_) => return StatusCode::PAYLOAD_TOO_LARGE,
        };
        match error {
            PipelineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PipelineError::TranslationServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            PipelineError::TranscriptionFailure(_)
            | PipelineError::TranslationFailed { .. }
            | PipelineError::SynthesisFailure(_)
            | PipelineError::ResourceCleanupFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client errors echo the validation message; server errors get a
    /// fixed sentence so engine diagnostics never leave the process.
    fn public_message(&self) -> String {
        let error = match self {
            ApiError::Pipeline(e) => e,
            ApiError::PayloadTooLarge(_) => {
                return "Request body exceeds the upload limit".to_string();
            }
        };
        match error {
            PipelineError::InvalidInput(message) => message.clone(),
            PipelineError::TranscriptionFailure(_) => {
                "The audio could not be transcribed".to_string()
            }
            PipelineError::TranslationFailed { .. } => "The text could not be translated".to_string(),
            PipelineError::TranslationServiceUnavailable { .. } => {
                "Translation service is temporarily unavailable, try again later".to_string()
            }
            PipelineError::SynthesisFailure(_) => "Speech could not be synthesized".to_string(),
            PipelineError::ResourceCleanupFailure(_) => "Internal error".to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Pipeline(e) => write!(f, "{}", e),
            ApiError::PayloadTooLarge(message) => write!(f, "payload too large: {}", message),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        Self::Pipeline(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::rejected_body(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self::rejected_body(
            e.status(),
            format!("Failed to read multipart: {}", e.body_text()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "Request failed");
        } else {
            tracing::warn!(kind = self.kind(), error = %self, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.kind().to_string(),
                message: self.public_message(),
            }),
        )
            .into_response()
    }
}
