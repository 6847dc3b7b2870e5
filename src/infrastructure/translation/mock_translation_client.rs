use async_trait::async_trait;

use crate::application::ports::{TranslationClient, TranslationClientError};
use crate::domain::TranslationTarget;

/// Scaffold client: tags the input with the target language.
pub struct MockTranslationClient;

#[async_trait]
impl TranslationClient for MockTranslationClient {
    async fn translate(
        &self,
        text: &str,
        target: &TranslationTarget,
    ) -> Result<String, TranslationClientError> {
        Ok(format!("[{}] {}", target, text))
    }
}
