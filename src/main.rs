use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use parlance::application::services::{
    PipelineOrchestrator, Synthesizer, Transcriber, Translator,
};
use parlance::infrastructure::audio::TranscriptionEngineFactory;
use parlance::infrastructure::observability::init_tracing;
use parlance::infrastructure::speech::SpeechSynthesizerFactory;
use parlance::infrastructure::translation::HttpTranslationClientFactory;
use parlance::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let scaffold = ScaffoldConfig::default();

    let mut settings = Settings::load(environment).context("Failed to load settings")?;
    if scaffold.enabled {
        settings = settings.into_scaffold();
    }

    init_tracing(settings.tracing_config(environment), settings.server.port);

    if scaffold.enabled {
        tracing::warn!("Scaffold mode enabled: all engines are mocked");
    }

    let orchestrator = build_orchestrator(&settings)?;

    let state = AppState {
        orchestrator: Arc::new(orchestrator),
        max_upload_bytes: settings.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_orchestrator(settings: &Settings) -> anyhow::Result<PipelineOrchestrator> {
    let scratch_dir = settings.scratch_dir();
    std::fs::create_dir_all(&scratch_dir).with_context(|| {
        format!("Failed to create scratch directory {}", scratch_dir.display())
    })?;

    let transcription = &settings.transcription;
    let engine = TranscriptionEngineFactory::create(
        transcription.provider,
        &transcription.model,
        transcription.api_key.clone(),
        transcription.base_url.clone(),
    )?;

    let clients = HttpTranslationClientFactory::new(settings.translation_client_config())?;

    let synthesis = &settings.synthesis;
    let voice = SpeechSynthesizerFactory::create(
        synthesis.provider,
        synthesis.api_key.clone(),
        synthesis.base_url.clone(),
        synthesis.model.clone(),
        synthesis.voice.clone(),
    )?;

    tracing::info!(
        transcription = ?transcription.provider,
        translation = ?settings.translation.provider,
        synthesis = ?synthesis.provider,
        scratch_dir = %scratch_dir.display(),
        "Pipeline engines configured"
    );

    Ok(PipelineOrchestrator::new(
        Transcriber::new(engine),
        Translator::new(Arc::new(clients), settings.retry_policy()),
        Synthesizer::new(voice, scratch_dir.clone()),
        scratch_dir,
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
