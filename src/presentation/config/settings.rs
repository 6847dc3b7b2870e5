use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use crate::application::services::RetryPolicy;
use crate::infrastructure::audio::TranscriptionProvider;
use crate::infrastructure::observability::{LOG_FORMAT_VAR, TracingConfig, log_format_is_json};
use crate::infrastructure::speech::SynthesisProvider;
use crate::infrastructure::translation::{TranslationClientConfig, TranslationProvider};

use super::environment::Environment;

const DEFAULT_LIBRETRANSLATE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub translation: TranslationSettings,
    pub synthesis: SynthesisSettings,
    pub audio: AudioSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProvider,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub provider: TranslationProvider,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub model: String,
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisSettings {
    pub provider: SynthesisProvider,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub voice: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub scratch_dir: Option<PathBuf>,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: Option<String>,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<environment>.toml` and
    /// `APP_`-prefixed environment variables (`APP_TRANSLATION__API_KEY`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let file_name = format!("appsettings.{}", environment.as_str().to_lowercase());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("transcription.provider", "openai")?
            .set_default("transcription.model", "whisper-1")?
            .set_default("translation.provider", "libretranslate")?
            .set_default("translation.model", "gpt-4o-mini")?
            .set_default("translation.max_attempts", 3)?
            .set_default("translation.base_delay_ms", 1000)?
            .set_default("translation.request_timeout_secs", 30)?
            .set_default("synthesis.provider", "google")?
            .set_default("audio.max_upload_mb", 25)?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Swaps every remote capability for its deterministic stand-in.
    pub fn into_scaffold(mut self) -> Self {
        self.transcription.provider = TranscriptionProvider::Mock;
        self.translation.provider = TranslationProvider::Mock;
        self.synthesis.provider = SynthesisProvider::Mock;
        self
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.audio
            .scratch_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("parlance"))
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.audio.max_upload_mb * 1024 * 1024
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.translation.max_attempts,
            base_delay: Duration::from_millis(self.translation.base_delay_ms),
        }
    }

    /// Only LibreTranslate falls back to a local default URL; the other
    /// providers keep their own endpoint unless one is configured.
    pub fn translation_client_config(&self) -> TranslationClientConfig {
        let base_url = match self.translation.provider {
            TranslationProvider::LibreTranslate => Some(
                self.translation
                    .base_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LIBRETRANSLATE_URL.to_string()),
            ),
            _ => self.translation.base_url.clone(),
        };

        TranslationClientConfig {
            provider: self.translation.provider,
            base_url,
            api_key: self.translation.api_key.clone(),
            model: self.translation.model.clone(),
            request_timeout: Duration::from_secs(self.translation.request_timeout_secs),
        }
    }

    /// `LOG_FORMAT=json` turns on JSON output even when the settings
    /// file leaves it off.
    pub fn tracing_config(&self, environment: Environment) -> TracingConfig {
        let log_format = std::env::var(LOG_FORMAT_VAR).ok();
        self.tracing_config_with(environment, log_format.as_deref())
    }

    pub fn tracing_config_with(
        &self,
        environment: Environment,
        log_format: Option<&str>,
    ) -> TracingConfig {
        TracingConfig {
            environment: environment.to_string(),
            level: self.logging.level.clone(),
            json_format: self.logging.enable_json || log_format_is_json(log_format),
        }
    }
}
