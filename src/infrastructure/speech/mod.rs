mod google_tts_client;
mod language_tag;
mod mock_speech_synthesizer;
mod openai_speech_client;
mod speech_synthesizer_factory;

pub use google_tts_client::{GoogleTtsClient, MAX_CHUNK_CHARS, split_text};
pub use language_tag::validate_language;
pub use mock_speech_synthesizer::MockSpeechSynthesizer;
pub use openai_speech_client::OpenAiSpeechClient;
pub use speech_synthesizer_factory::{SpeechSynthesizerFactory, SynthesisProvider};
