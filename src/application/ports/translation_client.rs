use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::TranslationTarget;

#[async_trait]
pub trait TranslationClient: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target: &TranslationTarget,
    ) -> Result<String, TranslationClientError>;
}

/// Builds translation client handles. Called once per attempt so a retry
/// never reuses a connection that has already failed.
pub trait TranslationClientFactory: Send + Sync {
    fn create(&self) -> Result<Arc<dyn TranslationClient>, TranslationClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    /// The remote service answered with a payload that could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("translation came back empty")]
    EmptyTranslation,
    #[error("client configuration: {0}")]
    Configuration(String),
}

impl TranslationClientError {
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, TranslationClientError::MalformedResponse(_))
    }
}
