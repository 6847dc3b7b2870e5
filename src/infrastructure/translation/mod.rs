mod libre_translate_client;
mod mock_translation_client;
mod openai_translation_client;
mod response;
mod translation_client_factory;

pub use libre_translate_client::LibreTranslateClient;
pub use mock_translation_client::MockTranslationClient;
pub use openai_translation_client::OpenAiTranslationClient;
pub use translation_client_factory::{
    HttpTranslationClientFactory, TranslationClientConfig, TranslationProvider,
};
