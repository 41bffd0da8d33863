//! Playlist and playback actions.
//!
//! Every user-visible operation, whether it came from a command-line flag or a
//! voice command, is an [`Action`]. [`MoodController::execute`] performs it
//! against the client traits and converts any client failure into an
//! [`OperationError`] naming the attempted operation. [`MoodController::spawn`]
//! runs an action as its own task and writes exactly one result line to the
//! activity log.

use std::{fmt, sync::Arc};

use thiserror::Error;
use tokio::task::JoinHandle;

use crate::{
    management::{ActivityLog, SessionContext},
    request::PlaylistRequest,
    spotify::{ClientError, PlaybackClient, PlaylistClient},
    utils,
    voice::{RepeatState, next_repeat_state, next_shuffle_state},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreatePlaylist(PlaylistRequest),
    PlayPlaylist,
    /// Start or resume playback of whatever context is current.
    Play,
    Pause,
    Next,
    Previous,
    ToggleShuffle,
    ToggleRepeat,
    SetShuffle(bool),
    SetRepeat(RepeatState),
    StopVoice,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::CreatePlaylist(_) => "create playlist",
            Action::PlayPlaylist => "play playlist",
            Action::Play => "play",
            Action::Pause => "pause",
            Action::Next => "next track",
            Action::Previous => "previous track",
            Action::ToggleShuffle | Action::SetShuffle(_) => "shuffle",
            Action::ToggleRepeat | Action::SetRepeat(_) => "repeat",
            Action::StopVoice => "stop voice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The playlist exists; `added` may be zero when the search found nothing.
    PlaylistCreated { name: String, id: String, added: usize },
    PlaylistPlaying,
    PlaybackStarted,
    Paused,
    SkippedNext,
    SkippedPrevious,
    Shuffle(bool),
    Repeat(RepeatState),
    VoiceStopped,
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::PlaylistCreated { name, added: 0, .. } => {
                write!(f, "Playlist '{}' created, zero tracks added (no tracks found).", name)
            }
            ActionOutcome::PlaylistCreated { name, added, .. } => {
                write!(f, "Playlist '{}' created, added {} tracks.", name, added)
            }
            ActionOutcome::PlaylistPlaying => f.write_str("Playing playlist."),
            ActionOutcome::PlaybackStarted => f.write_str("Playback started."),
            ActionOutcome::Paused => f.write_str("Playback paused."),
            ActionOutcome::SkippedNext => f.write_str("Skipped to next track."),
            ActionOutcome::SkippedPrevious => f.write_str("Skipped to previous track."),
            ActionOutcome::Shuffle(true) => f.write_str("Shuffle on."),
            ActionOutcome::Shuffle(false) => f.write_str("Shuffle off."),
            ActionOutcome::Repeat(state) => write!(f, "Repeat: {}.", state),
            ActionOutcome::VoiceStopped => f.write_str("Voice mode disabled."),
        }
    }
}

/// Failure of one attempted operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error during {operation}: {message}")]
pub struct OperationError {
    pub operation: &'static str,
    pub message: String,
}

impl OperationError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }

    fn client(operation: &'static str, err: ClientError) -> Self {
        Self::new(operation, err.to_string())
    }
}

/// Executes actions against the playback and playlist clients.
///
/// Cheap to share: clone the `Arc` into every task that needs it.
pub struct MoodController {
    playback: Arc<dyn PlaybackClient>,
    playlists: Arc<dyn PlaylistClient>,
    context: Arc<SessionContext>,
    log: ActivityLog,
}

impl MoodController {
    pub fn new(
        playback: Arc<dyn PlaybackClient>,
        playlists: Arc<dyn PlaylistClient>,
        context: Arc<SessionContext>,
        log: ActivityLog,
    ) -> Self {
        Self {
            playback,
            playlists,
            context,
            log,
        }
    }

    pub fn context(&self) -> &Arc<SessionContext> {
        &self.context
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub async fn execute(&self, action: Action) -> Result<ActionOutcome, OperationError> {
        let name = action.name();
        let wrap = |e: ClientError| OperationError::client(name, e);

        match action {
            Action::CreatePlaylist(request) => self.create_playlist(&request).await,
            Action::PlayPlaylist => {
                let playlist_id = self
                    .context
                    .current_playlist()
                    .ok_or_else(|| OperationError::new(name, "no playlist to play"))?;
                self.playback
                    .start_playback(Some(&utils::playlist_context_uri(&playlist_id)))
                    .await
                    .map_err(wrap)?;
                Ok(ActionOutcome::PlaylistPlaying)
            }
            Action::Play => {
                self.playback.start_playback(None).await.map_err(wrap)?;
                Ok(ActionOutcome::PlaybackStarted)
            }
            Action::Pause => {
                self.playback.pause_playback().await.map_err(wrap)?;
                Ok(ActionOutcome::Paused)
            }
            Action::Next => {
                self.playback.next_track().await.map_err(wrap)?;
                Ok(ActionOutcome::SkippedNext)
            }
            Action::Previous => {
                self.playback.previous_track().await.map_err(wrap)?;
                Ok(ActionOutcome::SkippedPrevious)
            }
            Action::ToggleShuffle => {
                // Always re-read: another device may have changed it.
                let current = self.playback.current_playback().await.map_err(wrap)?;
                let next = next_shuffle_state(current.map(|s| s.shuffle()).unwrap_or(false));
                self.playback.set_shuffle(next).await.map_err(wrap)?;
                Ok(ActionOutcome::Shuffle(next))
            }
            Action::ToggleRepeat => {
                let current = self.playback.current_playback().await.map_err(wrap)?;
                let next = next_repeat_state(current.map(|s| s.repeat()).unwrap_or_default());
                self.playback.set_repeat(next).await.map_err(wrap)?;
                Ok(ActionOutcome::Repeat(next))
            }
            Action::SetShuffle(state) => {
                self.playback.set_shuffle(state).await.map_err(wrap)?;
                Ok(ActionOutcome::Shuffle(state))
            }
            Action::SetRepeat(state) => {
                self.playback.set_repeat(state).await.map_err(wrap)?;
                Ok(ActionOutcome::Repeat(state))
            }
            Action::StopVoice => {
                self.context.set_voice_active(false);
                Ok(ActionOutcome::VoiceStopped)
            }
        }
    }

    /// Creates the playlist, searches tracks and adds them.
    ///
    /// The playlist id is recorded as soon as the playlist exists, so a later
    /// search or add failure leaves an empty playlist that can still be played.
    async fn create_playlist(&self, request: &PlaylistRequest) -> Result<ActionOutcome, OperationError> {
        const OPERATION: &str = "create playlist";
        let name = request.playlist_name();

        let id = self
            .playlists
            .create_playlist(&name)
            .await
            .map_err(|e| OperationError::client(OPERATION, e))?;
        self.context.set_current_playlist(id.clone());

        let uris = self
            .playlists
            .search_tracks(&request.search_query(), request.size())
            .await
            .map_err(|e| OperationError::client(OPERATION, e))?;

        if !uris.is_empty() {
            self.playlists
                .add_tracks(&id, &uris)
                .await
                .map_err(|e| OperationError::client(OPERATION, e))?;
        }

        Ok(ActionOutcome::PlaylistCreated {
            name,
            id,
            added: uris.len(),
        })
    }

    /// Executes and writes the single result line for this attempt.
    pub async fn run(&self, action: Action) -> Result<ActionOutcome, OperationError> {
        let result = self.execute(action).await;
        match &result {
            Ok(outcome) => self.log.success(outcome.to_string()),
            Err(e) => self.log.failure(e.to_string()),
        }
        result
    }

    /// Runs `action` as an independent task.
    ///
    /// The task is not cancelled when the handle is dropped; awaiting the
    /// handle only observes its result.
    pub fn spawn(self: &Arc<Self>, action: Action) -> JoinHandle<Result<ActionOutcome, OperationError>> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.run(action).await })
    }
}
