use reqwest::multipart;

use crate::application::ports::TranscriptionError;

use super::audio_container::AudioContainer;

/// Wraps raw audio in a multipart file part named after its detected
/// container. Unknown payloads go out as WAV and are left for the remote
/// engine to reject.
pub fn audio_part(audio_data: &[u8]) -> Result<multipart::Part, TranscriptionError> {
    let container = AudioContainer::sniff(audio_data).unwrap_or(AudioContainer::Wav);

    multipart::Part::bytes(audio_data.to_vec())
        .file_name(container.file_name())
        .mime_str(container.mime())
        .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))
}

pub async fn error_from_response(response: reqwest::Response) -> TranscriptionError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());

    if status == reqwest::StatusCode::BAD_REQUEST
        || status == reqwest::StatusCode::UNSUPPORTED_MEDIA_TYPE
    {
        return TranscriptionError::InvalidAudio(format!("status {}: {}", status, body));
    }

    TranscriptionError::ApiRequestFailed(format!("status {}: {}", status, body))
}
