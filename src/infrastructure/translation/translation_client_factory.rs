use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::application::ports::{
    TranslationClient, TranslationClientError, TranslationClientFactory,
};

use super::libre_translate_client::LibreTranslateClient;
use super::mock_translation_client::MockTranslationClient;
use super::openai_translation_client::OpenAiTranslationClient;

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    #[serde(rename = "libretranslate")]
    LibreTranslate,
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Debug, Clone)]
pub struct TranslationClientConfig {
    pub provider: TranslationProvider,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub model: String,
    pub request_timeout: Duration,
}

/// Builds a brand-new HTTP client, and with it a fresh connection pool, on
/// every call to `create`.
pub struct HttpTranslationClientFactory {
    config: TranslationClientConfig,
}

impl HttpTranslationClientFactory {
    pub fn new(config: TranslationClientConfig) -> Result<Self, TranslationClientError> {
        match config.provider {
            TranslationProvider::LibreTranslate if config.base_url.is_none() => {
                return Err(TranslationClientError::Configuration(
                    "base URL required for LibreTranslate".to_string(),
                ));
            }
            TranslationProvider::OpenAi if config.api_key.is_none() => {
                return Err(TranslationClientError::Configuration(
                    "API key required for OpenAI translation".to_string(),
                ));
            }
            _ => {}
        }
        Ok(Self { config })
    }

    fn http_client(&self) -> Result<Client, TranslationClientError> {
        Client::builder()
            .timeout(self.config.request_timeout)
            .build()
            .map_err(|e| TranslationClientError::Configuration(format!("http client: {}", e)))
    }
}

impl TranslationClientFactory for HttpTranslationClientFactory {
    fn create(&self) -> Result<Arc<dyn TranslationClient>, TranslationClientError> {
        let config = &self.config;
        match config.provider {
            TranslationProvider::LibreTranslate => {
                let base_url = config.base_url.as_deref().ok_or_else(|| {
                    TranslationClientError::Configuration("missing base URL".to_string())
                })?;
                Ok(Arc::new(LibreTranslateClient::new(
                    self.http_client()?,
                    base_url,
                    config.api_key.clone(),
                )))
            }
            TranslationProvider::OpenAi => {
                let api_key = config.api_key.clone().ok_or_else(|| {
                    TranslationClientError::Configuration("missing API key".to_string())
                })?;
                Ok(Arc::new(OpenAiTranslationClient::new(
                    self.http_client()?,
                    config.base_url.as_deref(),
                    api_key,
                    config.model.clone(),
                )))
            }
            TranslationProvider::Mock => Ok(Arc::new(MockTranslationClient)),
        }
    }
}
