//! Console speech engine.
//!
//! Treats each line typed on standard input as one utterance, so the voice
//! session can be driven from a terminal or a pipe without a microphone.

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::session::{AudioSource, CaptureError, SpeechEngine, Utterance};

#[derive(Debug, Default)]
pub struct ConsoleSpeechEngine;

impl ConsoleSpeechEngine {
    pub fn new() -> Self {
        Self
    }
}

struct ConsoleSource {
    lines: Lines<BufReader<Stdin>>,
}

#[async_trait]
impl AudioSource for ConsoleSource {
    async fn calibrate(&mut self, _duration: Duration) -> Result<(), CaptureError> {
        // Typed input has no ambient noise.
        Ok(())
    }

    async fn listen(
        &mut self,
        timeout: Duration,
        _phrase_time_limit: Duration,
    ) -> Result<Utterance, CaptureError> {
        // `next_line` is cancel safe, so a timed-out read loses nothing.
        match tokio::time::timeout(timeout, self.lines.next_line()).await {
            Err(_) => Err(CaptureError::Timeout),
            Ok(Ok(Some(line))) => Ok(Utterance {
                data: line.into_bytes(),
            }),
            Ok(Ok(None)) => Err(CaptureError::SourceClosed),
            Ok(Err(e)) => Err(CaptureError::Device(e.to_string())),
        }
    }
}

#[async_trait]
impl SpeechEngine for ConsoleSpeechEngine {
    async fn open(&self) -> Result<Box<dyn AudioSource>, CaptureError> {
        Ok(Box::new(ConsoleSource {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }))
    }

    async fn transcribe(&self, utterance: &Utterance) -> Result<String, CaptureError> {
        // Lines come from `next_line`, so the bytes are already valid UTF-8.
        let text = String::from_utf8_lossy(&utterance.data);
        let text = text.trim();
        if text.is_empty() {
            return Err(CaptureError::Unintelligible);
        }
        Ok(text.to_string())
    }
}
