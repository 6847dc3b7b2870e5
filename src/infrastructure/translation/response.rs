use reqwest::{Response, StatusCode};

use crate::application::ports::TranslationClientError;

pub async fn error_for_status(response: Response) -> Result<Response, TranslationClientError> {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(TranslationClientError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TranslationClientError::ApiRequestFailed(format!(
            "HTTP {}: {}",
            status, body
        )));
    }

    Ok(response)
}

/// Reads the body as text so that transport failures stay distinct from
/// payloads that arrive intact but cannot be decoded.
pub async fn read_body(response: Response) -> Result<String, TranslationClientError> {
    response
        .text()
        .await
        .map_err(|e| TranslationClientError::ApiRequestFailed(format!("body: {}", e)))
}
