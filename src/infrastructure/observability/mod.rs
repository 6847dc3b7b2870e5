mod init_tracing;
mod request_id;
mod text_sanitizer;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use text_sanitizer::sanitize_text;
pub use tracing_config::{LOG_FORMAT_VAR, TracingConfig, log_format_is_json};
