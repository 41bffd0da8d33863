//! Voice session controller.
//!
//! Runs the listen → transcribe → parse → dispatch loop on its own task.
//! The loop checks the session's voice flag before every capture, so after
//! [`VoiceSession::stop`] at most the capture already in flight completes,
//! and its transcript is discarded rather than dispatched.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use thiserror::Error;
use tokio::{sync::Mutex, task::JoinHandle};

use crate::{actions::MoodController, config::VoiceSettings};

use super::{dispatch, parse};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("listening timed out while waiting for phrase to start")]
    Timeout,

    #[error("speech was unintelligible")]
    Unintelligible,

    /// The audio source is gone for good, e.g. the input stream ended.
    #[error("audio source closed")]
    SourceClosed,

    #[error("audio device error: {0}")]
    Device(String),

    #[error("recognition service error: {0}")]
    Service(String),
}

impl CaptureError {
    /// Timeouts and unintelligible speech are expected; the loop just keeps listening.
    pub fn is_transient(&self) -> bool {
        matches!(self, CaptureError::Timeout | CaptureError::Unintelligible)
    }
}

/// One captured utterance, as handed from the source to the recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub data: Vec<u8>,
}

/// An open capture stream. Dropping it releases the device.
#[async_trait]
pub trait AudioSource: Send {
    async fn calibrate(&mut self, duration: Duration) -> Result<(), CaptureError>;

    /// Waits up to `timeout` for speech to start and captures at most
    /// `phrase_time_limit` of it.
    async fn listen(
        &mut self,
        timeout: Duration,
        phrase_time_limit: Duration,
    ) -> Result<Utterance, CaptureError>;
}

#[async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn open(&self) -> Result<Box<dyn AudioSource>, CaptureError>;

    async fn transcribe(&self, utterance: &Utterance) -> Result<String, CaptureError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceSessionState {
    Inactive,
    Listening,
}

pub struct VoiceSession {
    engine: Arc<dyn SpeechEngine>,
    controller: Arc<MoodController>,
    settings: VoiceSettings,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl VoiceSession {
    pub fn new(
        engine: Arc<dyn SpeechEngine>,
        controller: Arc<MoodController>,
        settings: VoiceSettings,
    ) -> Self {
        Self {
            engine,
            controller,
            settings,
            task: Mutex::new(None),
        }
    }

    pub fn state(&self) -> VoiceSessionState {
        if self.controller.context().voice_active() {
            VoiceSessionState::Listening
        } else {
            VoiceSessionState::Inactive
        }
    }

    /// Inactive → Listening. Returns false when a session is already listening.
    ///
    /// A previous loop that was stopped but is still finishing its last
    /// capture is awaited first, so two loops never share the source.
    pub async fn start(&self) -> bool {
        let mut task = self.task.lock().await;
        if self.controller.context().voice_active() {
            return false;
        }

        if let Some(previous) = task.take() {
            let _ = previous.await;
        }

        if !self.controller.context().activate_voice() {
            return false;
        }

        self.controller.log().info(
            "Voice mode enabled. Say commands like 'create 10 happy songs by taylor swift'.",
        );

        let engine = Arc::clone(&self.engine);
        let controller = Arc::clone(&self.controller);
        let settings = self.settings;
        *task = Some(tokio::spawn(async move {
            listen_loop(engine, controller, settings).await;
        }));
        true
    }

    /// Listening → Inactive; idempotent.
    pub fn stop(&self) {
        let context = self.controller.context();
        if context.voice_active() {
            context.set_voice_active(false);
            self.controller.log().info("Voice mode disabled.");
        }
    }

    /// Waits for the loop to exit. Returns immediately if it never started.
    pub async fn join(&self) {
        let mut task = self.task.lock().await;
        if let Some(handle) = task.take() {
            let _ = handle.await;
        }
    }
}

async fn listen_loop(
    engine: Arc<dyn SpeechEngine>,
    controller: Arc<MoodController>,
    settings: VoiceSettings,
) {
    let context = Arc::clone(controller.context());
    let log = controller.log().clone();

    let mut source = match engine.open().await {
        Ok(source) => source,
        Err(e) => {
            log.failure(format!("Voice error: {}", e));
            context.set_voice_active(false);
            return;
        }
    };

    if let Err(e) = source.calibrate(settings.calibration).await {
        log.warning(format!("Ambient noise calibration failed: {}", e));
    }

    while context.voice_active() {
        let captured = match source
            .listen(settings.listen_timeout, settings.phrase_time_limit)
            .await
        {
            Ok(utterance) => engine.transcribe(&utterance).await,
            Err(e) => Err(e),
        };

        let transcript = match captured {
            Ok(text) => text.to_lowercase(),
            Err(e) if e.is_transient() => continue,
            Err(CaptureError::SourceClosed) => {
                log.info("Voice input closed.");
                context.set_voice_active(false);
                break;
            }
            Err(e) => {
                log.failure(format!("Voice error: {}", e));
                continue;
            }
        };

        // Stopped while this utterance was in flight.
        if !context.voice_active() {
            break;
        }

        log.info(format!("Voice command: {}", transcript));
        // Failures are already logged by the controller.
        let _ = dispatch(parse(&transcript), &controller).await;
    }
}
