#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::Instant;

use parlance::application::ports::{
    PipelineObserver, SpeechSynthesizer, SynthesisError, TranscriptionEngine, TranscriptionError,
    TranslationClient, TranslationClientError, TranslationClientFactory,
};
use parlance::application::services::{
    PipelineOrchestrator, RetryPolicy, Synthesizer, Transcriber, Translator,
};
use parlance::domain::{PipelineStage, TranslationTarget};

pub const ENGLISH_SENTENCE: &str = "Where is the train station?";
pub const SPANISH_SENTENCE: &str = "¿Dónde está la estación de tren?";
pub const FAKE_MP3: &[u8] = b"ID3\x04\x00\x00fake mp3 frames";

pub fn wav_bytes() -> Vec<u8> {
    let mut data = b"RIFF".to_vec();
    data.extend_from_slice(&36u32.to_le_bytes());
    data.extend_from_slice(b"WAVEfmt ");
    data.extend_from_slice(&[0u8; 24]);
    data
}

pub fn target(tag: &str) -> TranslationTarget {
    TranslationTarget::parse(tag).unwrap()
}

pub fn count_artifacts(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        base_delay: Duration::from_millis(10),
    }
}

#[derive(Clone)]
pub enum Speech {
    Text(&'static str),
    Fail,
    Panic,
}

pub struct ScriptedTranscriptionEngine {
    behavior: Speech,
    calls: AtomicUsize,
}

impl ScriptedTranscriptionEngine {
    pub fn new(behavior: Speech) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptionEngine for ScriptedTranscriptionEngine {
    async fn transcribe(&self, _audio_data: &[u8]) -> Result<String, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Speech::Text(text) => Ok(text.to_string()),
            Speech::Fail => Err(TranscriptionError::InvalidAudio("corrupt header".to_string())),
            Speech::Panic => panic!("transcription engine exploded"),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Step {
    Translated(&'static str),
    Malformed,
    Unavailable,
    Empty,
}

impl Step {
    fn outcome(&self) -> Result<String, TranslationClientError> {
        match self {
            Step::Translated(text) => Ok(text.to_string()),
            Step::Malformed => Err(TranslationClientError::MalformedResponse(
                "expected value at line 1 column 1".to_string(),
            )),
            Step::Unavailable => Err(TranslationClientError::ApiRequestFailed(
                "connection reset".to_string(),
            )),
            Step::Empty => Ok(String::new()),
        }
    }
}

struct Script {
    steps: Mutex<VecDeque<Step>>,
    last: Mutex<Option<Step>>,
    attempts: Mutex<Vec<Instant>>,
}

/// Replays a fixed sequence of outcomes; once the script runs out the last
/// step repeats forever.
pub struct ScriptedTranslationFactory {
    script: Arc<Script>,
    creates: AtomicUsize,
}

impl ScriptedTranslationFactory {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            script: Arc::new(Script {
                steps: Mutex::new(steps.into()),
                last: Mutex::new(None),
                attempts: Mutex::new(Vec::new()),
            }),
            creates: AtomicUsize::new(0),
        })
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn attempts(&self) -> usize {
        self.script.attempts.lock().unwrap().len()
    }

    /// Gaps between consecutive attempts.
    pub fn waits(&self) -> Vec<Duration> {
        let attempts = self.script.attempts.lock().unwrap();
        attempts.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

impl TranslationClientFactory for ScriptedTranslationFactory {
    fn create(&self) -> Result<Arc<dyn TranslationClient>, TranslationClientError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(ScriptedTranslationClient {
            script: Arc::clone(&self.script),
        }))
    }
}

struct ScriptedTranslationClient {
    script: Arc<Script>,
}

#[async_trait]
impl TranslationClient for ScriptedTranslationClient {
    async fn translate(
        &self,
        _text: &str,
        _target: &TranslationTarget,
    ) -> Result<String, TranslationClientError> {
        self.script.attempts.lock().unwrap().push(Instant::now());
        let step = {
            let mut steps = self.script.steps.lock().unwrap();
            let mut last = self.script.last.lock().unwrap();
            match steps.pop_front() {
                Some(step) => {
                    *last = Some(step.clone());
                    step
                }
                None => last.clone().expect("script must not be empty"),
            }
        };
        step.outcome()
    }
}

#[derive(Clone)]
pub enum Voice {
    Audio(&'static [u8]),
    Fail,
    Panic,
}

pub struct ScriptedSynthesizer {
    behavior: Voice,
    calls: AtomicUsize,
}

impl ScriptedSynthesizer {
    pub fn new(behavior: Voice) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechSynthesizer for ScriptedSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        language: &TranslationTarget,
    ) -> Result<Vec<u8>, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Voice::Audio(bytes) => Ok(bytes.to_vec()),
            Voice::Fail => Err(SynthesisError::UnsupportedLanguage(language.to_string())),
            Voice::Panic => panic!("speech engine exploded"),
        }
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    stages: Mutex<Vec<PipelineStage>>,
}

impl RecordingObserver {
    pub fn stages(&self) -> Vec<PipelineStage> {
        self.stages.lock().unwrap().clone()
    }
}

impl PipelineObserver for RecordingObserver {
    fn on_stage(&self, stage: PipelineStage) {
        self.stages.lock().unwrap().push(stage);
    }
}

pub struct Harness {
    pub scratch: tempfile::TempDir,
    pub transcription: Arc<ScriptedTranscriptionEngine>,
    pub translation: Arc<ScriptedTranslationFactory>,
    pub synthesis: Arc<ScriptedSynthesizer>,
    pub observer: Arc<RecordingObserver>,
    pub orchestrator: Arc<PipelineOrchestrator>,
}

impl Harness {
    pub fn new(speech: Speech, steps: Vec<Step>, voice: Voice) -> Self {
        Self::with_policy(speech, steps, voice, fast_retry())
    }

    pub fn with_policy(speech: Speech, steps: Vec<Step>, voice: Voice, policy: RetryPolicy) -> Self {
        let scratch = tempfile::TempDir::new().unwrap();
        let transcription = ScriptedTranscriptionEngine::new(speech);
        let translation = ScriptedTranslationFactory::new(steps);
        let synthesis = ScriptedSynthesizer::new(voice);
        let observer = Arc::new(RecordingObserver::default());

        let orchestrator = PipelineOrchestrator::new(
            Transcriber::new(transcription.clone()),
            Translator::new(translation.clone(), policy),
            Synthesizer::new(synthesis.clone(), scratch.path().to_path_buf()),
            scratch.path().to_path_buf(),
        )
        .with_observer(observer.clone());
        let orchestrator = Arc::new(orchestrator);

        Self {
            scratch,
            transcription,
            translation,
            synthesis,
            observer,
            orchestrator,
        }
    }

    pub fn happy() -> Self {
        Self::new(
            Speech::Text(ENGLISH_SENTENCE),
            vec![Step::Translated(SPANISH_SENTENCE)],
            Voice::Audio(FAKE_MP3),
        )
    }

    pub fn artifacts(&self) -> usize {
        count_artifacts(self.scratch.path())
    }
}

/// Serves `app` on an ephemeral local port until the returned sender fires.
pub async fn serve(app: Router) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}
