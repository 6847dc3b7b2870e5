use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranslationClient, TranslationClientError};
use crate::domain::TranslationTarget;

use super::response::{error_for_status, read_body};

pub struct LibreTranslateClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl LibreTranslateClient {
    pub fn new(client: Client, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl TranslationClient for LibreTranslateClient {
    async fn translate(
        &self,
        text: &str,
        target: &TranslationTarget,
    ) -> Result<String, TranslationClientError> {
        let request = TranslateRequest {
            q: text,
            source: "auto",
            target: target.as_str(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        tracing::debug!(language = %target, "Sending text to LibreTranslate");

        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslationClientError::ApiRequestFailed(format!("request: {}", e)))?;

        let response = error_for_status(response).await?;
        let body = read_body(response).await?;

        let parsed: TranslateResponse = serde_json::from_str(&body)
            .map_err(|e| TranslationClientError::MalformedResponse(e.to_string()))?;

        match parsed.translated_text {
            Some(t) if !t.trim().is_empty() => Ok(t),
            _ => Err(TranslationClientError::EmptyTranslation),
        }
    }
}
