mod error;
mod health;
mod synthesize;
mod transcribe;
mod translate;
mod translate_speech;
mod upload;

pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use synthesize::synthesize_handler;
pub use transcribe::transcribe_handler;
pub use translate::translate_handler;
pub use translate_speech::translate_speech_handler;
