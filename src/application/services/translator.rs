use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TranslationClientError, TranslationClientFactory};
use crate::domain::{RetryState, TranslationTarget};

use super::pipeline_error::PipelineError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

/// Translation stage. Retries a flaky remote dependency with exponential
/// backoff, using a fresh client handle for every attempt.
pub struct Translator {
    clients: Arc<dyn TranslationClientFactory>,
    policy: RetryPolicy,
}

impl Translator {
    pub fn new(clients: Arc<dyn TranslationClientFactory>, policy: RetryPolicy) -> Self {
        Self { clients, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    #[tracing::instrument(skip(self, text, target), fields(language = %target, chars = text.len()))]
    pub async fn translate(
        &self,
        text: &str,
        target: &TranslationTarget,
    ) -> Result<String, PipelineError> {
        let mut state = RetryState::new(self.policy.max_attempts, self.policy.base_delay);

        loop {
            let error = match self.attempt(text, target).await {
                Ok(translated) => {
                    tracing::info!(
                        attempt = state.attempt(),
                        chars = translated.len(),
                        "Translation completed"
                    );
                    return Ok(translated);
                }
                Err(e) => e,
            };

            tracing::warn!(
                attempt = state.attempt(),
                max_attempts = state.max_attempts(),
                error = %error,
                "Translation attempt failed"
            );

            match state.advance() {
                Some(backoff) => {
                    tracing::debug!(
                        next_attempt = state.attempt(),
                        backoff_ms = backoff.as_millis() as u64,
                        "Backing off before retrying translation"
                    );
                    tokio::time::sleep(backoff).await;
                }
                None => return Err(classify_exhausted(error, state.attempt())),
            }
        }
    }

    async fn attempt(
        &self,
        text: &str,
        target: &TranslationTarget,
    ) -> Result<String, TranslationClientError> {
        let client = self.clients.create()?;
        let translated = client.translate(text, target).await?;
        let translated = translated.trim();
        if translated.is_empty() {
            return Err(TranslationClientError::EmptyTranslation);
        }
        Ok(translated.to_string())
    }
}

fn classify_exhausted(error: TranslationClientError, attempts: u32) -> PipelineError {
    let message = error.to_string();
    tracing::error!(attempts, error = %message, "Translation retries exhausted");

    if error.is_malformed_response() {
        PipelineError::TranslationServiceUnavailable { attempts, message }
    } else {
        PipelineError::TranslationFailed { attempts, message }
    }
}
