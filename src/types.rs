use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::voice::RepeatState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: Tracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracks {
    pub items: Vec<Track>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartPlaybackRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,
}

/// Subset of `GET /me/player` the toggles need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    #[serde(default)]
    pub shuffle_state: Option<bool>,
    #[serde(default)]
    pub repeat_state: Option<String>,
}

impl PlaybackState {
    /// Reported repeat mode; an unknown value reads as [`RepeatState::Off`].
    pub fn repeat(&self) -> RepeatState {
        self.repeat_state
            .as_deref()
            .and_then(RepeatState::from_api)
            .unwrap_or_default()
    }

    /// Reported shuffle flag; absent reads as off.
    pub fn shuffle(&self) -> bool {
        self.shuffle_state.unwrap_or(false)
    }
}

#[derive(Tabled)]
pub struct VoiceCommandTableRow {
    pub priority: usize,
    pub say: String,
    pub action: String,
}
