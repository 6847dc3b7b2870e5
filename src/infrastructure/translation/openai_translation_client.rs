use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranslationClient, TranslationClientError};
use crate::domain::TranslationTarget;

use super::response::{error_for_status, read_body};

/// Translates through a chat completions model instructed to answer with
/// the translation only.
pub struct OpenAiTranslationClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiTranslationClient {
    pub fn new(client: Client, base_url: Option<&str>, api_key: String, model: String) -> Self {
        Self {
            client,
            base_url: base_url
                .unwrap_or("https://api.openai.com/v1")
                .trim_end_matches('/')
                .to_string(),
            api_key,
            model,
        }
    }
}

fn instruction(target: &TranslationTarget) -> String {
    format!(
        "Translate the user's text into the language with tag \"{}\". \
         Only provide the translation, nothing else.",
        target
    )
}

#[async_trait]
impl TranslationClient for OpenAiTranslationClient {
    async fn translate(
        &self,
        text: &str,
        target: &TranslationTarget,
    ) -> Result<String, TranslationClientError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instruction(target),
                },
                ChatMessage {
                    role: "user",
                    content: text.to_string(),
                },
            ],
            temperature: 0.0,
        };

        tracing::debug!(model = %self.model, language = %target, "Sending text to OpenAI for translation");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslationClientError::ApiRequestFailed(format!("request: {}", e)))?;

        let response = error_for_status(response).await?;
        let body = read_body(response).await?;

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| TranslationClientError::MalformedResponse(e.to_string()))?;

        let choice = parsed.choices.into_iter().next().ok_or_else(|| {
            TranslationClientError::MalformedResponse("response has no choices".to_string())
        })?;

        match choice.message.content {
            Some(t) if !t.trim().is_empty() => Ok(t.trim().to_string()),
            _ => Err(TranslationClientError::EmptyTranslation),
        }
    }
}
