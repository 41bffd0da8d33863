#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use playurmood::{
    actions::MoodController,
    management::{ActivityLog, SessionContext},
    spotify::{ClientError, PlaybackClient, PlaylistClient},
    types::PlaybackState,
    voice::{AudioSource, CaptureError, RepeatState, SpeechEngine, Utterance},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreatePlaylist(String),
    SearchTracks(String, u32),
    AddTracks(String, Vec<String>),
    StartPlayback(Option<String>),
    PausePlayback,
    NextTrack,
    PreviousTrack,
    CurrentPlayback,
    SetShuffle(bool),
    SetRepeat(RepeatState),
}

/// In-memory stand-in for the Spotify client that records every call.
#[derive(Default)]
pub struct FakeSpotify {
    pub calls: Mutex<Vec<Call>>,
    pub search_results: Mutex<Vec<String>>,
    pub playback: Mutex<Option<PlaybackState>>,
    /// Name of the call that should fail, e.g. "search_tracks".
    pub fail_on: Mutex<Option<&'static str>>,
}

impl FakeSpotify {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_tracks(uris: &[&str]) -> Arc<Self> {
        let fake = Self::default();
        *fake.search_results.lock().unwrap() = uris.iter().map(|u| u.to_string()).collect();
        Arc::new(fake)
    }

    pub fn set_playback(&self, shuffle: Option<bool>, repeat: Option<&str>) {
        *self.playback.lock().unwrap() = Some(PlaybackState {
            shuffle_state: shuffle,
            repeat_state: repeat.map(str::to_string),
        });
    }

    pub fn fail(&self, call: &'static str) {
        *self.fail_on.lock().unwrap() = Some(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str, call: Call) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if *self.fail_on.lock().unwrap() == Some(name) {
            return Err(ClientError::Api {
                status: 502,
                message: format!("{} exploded", name),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PlaylistClient for FakeSpotify {
    async fn create_playlist(&self, name: &str) -> Result<String, ClientError> {
        self.record("create_playlist", Call::CreatePlaylist(name.to_string()))?;
        Ok("playlist-1".to_string())
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<String>, ClientError> {
        self.record("search_tracks", Call::SearchTracks(query.to_string(), limit))?;
        let results = self.search_results.lock().unwrap();
        Ok(results.iter().take(limit as usize).cloned().collect())
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), ClientError> {
        self.record("add_tracks", Call::AddTracks(playlist_id.to_string(), uris.to_vec()))
    }
}

#[async_trait]
impl PlaybackClient for FakeSpotify {
    async fn start_playback(&self, context_uri: Option<&str>) -> Result<(), ClientError> {
        self.record("start_playback", Call::StartPlayback(context_uri.map(str::to_string)))
    }

    async fn pause_playback(&self) -> Result<(), ClientError> {
        self.record("pause_playback", Call::PausePlayback)
    }

    async fn next_track(&self) -> Result<(), ClientError> {
        self.record("next_track", Call::NextTrack)
    }

    async fn previous_track(&self) -> Result<(), ClientError> {
        self.record("previous_track", Call::PreviousTrack)
    }

    async fn current_playback(&self) -> Result<Option<PlaybackState>, ClientError> {
        self.record("current_playback", Call::CurrentPlayback)?;
        Ok(self.playback.lock().unwrap().clone())
    }

    async fn set_shuffle(&self, state: bool) -> Result<(), ClientError> {
        self.record("set_shuffle", Call::SetShuffle(state))?;
        if let Some(playback) = self.playback.lock().unwrap().as_mut() {
            playback.shuffle_state = Some(state);
        }
        Ok(())
    }

    async fn set_repeat(&self, state: RepeatState) -> Result<(), ClientError> {
        self.record("set_repeat", Call::SetRepeat(state))?;
        if let Some(playback) = self.playback.lock().unwrap().as_mut() {
            playback.repeat_state = Some(state.as_str().to_string());
        }
        Ok(())
    }
}

pub fn controller(fake: &Arc<FakeSpotify>) -> Arc<MoodController> {
    controller_with(fake, None)
}

pub fn controller_with(fake: &Arc<FakeSpotify>, playlist: Option<&str>) -> Arc<MoodController> {
    Arc::new(MoodController::new(
        fake.clone(),
        fake.clone(),
        Arc::new(SessionContext::new(playlist.map(str::to_string))),
        ActivityLog::silent(),
    ))
}

/// What the scripted source produces for one `listen` call.
#[derive(Debug, Clone)]
pub enum Step {
    Say(&'static str),
    Fail(CaptureError),
}

/// Speech engine that plays back a fixed script, then reports the source closed.
pub struct ScriptedEngine {
    script: Mutex<Option<VecDeque<Step>>>,
    pub listens: Arc<Mutex<usize>>,
}

impl ScriptedEngine {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(Some(steps.into())),
            listens: Arc::new(Mutex::new(0)),
        })
    }

    pub fn listen_count(&self) -> usize {
        *self.listens.lock().unwrap()
    }
}

struct ScriptedSource {
    steps: VecDeque<Step>,
    listens: Arc<Mutex<usize>>,
}

#[async_trait]
impl AudioSource for ScriptedSource {
    async fn calibrate(&mut self, _duration: Duration) -> Result<(), CaptureError> {
        Ok(())
    }

    async fn listen(
        &mut self,
        _timeout: Duration,
        _phrase_time_limit: Duration,
    ) -> Result<Utterance, CaptureError> {
        *self.listens.lock().unwrap() += 1;
        tokio::task::yield_now().await;
        match self.steps.pop_front() {
            Some(Step::Say(text)) => Ok(Utterance {
                data: text.as_bytes().to_vec(),
            }),
            Some(Step::Fail(e)) => Err(e),
            None => Err(CaptureError::SourceClosed),
        }
    }
}

#[async_trait]
impl SpeechEngine for ScriptedEngine {
    async fn open(&self) -> Result<Box<dyn AudioSource>, CaptureError> {
        let steps = self
            .script
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| CaptureError::Device("already opened".to_string()))?;
        Ok(Box::new(ScriptedSource {
            steps,
            listens: Arc::clone(&self.listens),
        }))
    }

    async fn transcribe(&self, utterance: &Utterance) -> Result<String, CaptureError> {
        String::from_utf8(utterance.data.clone()).map_err(|_| CaptureError::Unintelligible)
    }
}
