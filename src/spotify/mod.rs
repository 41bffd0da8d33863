//! # Spotify Integration Module
//!
//! This module is the integration layer between PlayURMood and the Spotify Web
//! API. The rest of the application never talks HTTP directly; it is written
//! against two small capability traits:
//!
//! - [`PlaylistClient`] - create a playlist, search tracks, add tracks
//! - [`PlaybackClient`] - start/pause playback, skip, read the current
//!   playback state, set shuffle and repeat
//!
//! [`client::SpotifyClient`] implements both over the Web API, and tests swap
//! in in-memory fakes.
//!
//! ## Architecture
//!
//! ```text
//! CLI / Voice session
//!          ↓
//! Actions (MoodController)
//!          ↓
//! PlaylistClient + PlaybackClient traits
//!          ↓
//! SpotifyClient (reqwest, JSON)      auth (OAuth 2.0 PKCE)
//!          ↓                              ↓
//! Spotify Web API                    Spotify Accounts service
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user id for playlist creation
//! - `POST /users/{user_id}/playlists` - Create new playlists
//! - `GET /search?type=track` - Track search, paged
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to playlists
//! - `PUT /me/player/play`, `PUT /me/player/pause` - Start, resume, pause
//! - `POST /me/player/next`, `POST /me/player/previous` - Skip
//! - `GET /me/player` - Current shuffle and repeat state
//! - `PUT /me/player/shuffle`, `PUT /me/player/repeat` - Set toggles
//! - `POST /api/token` - Token exchange and refresh operations
//!
//! ## Error Handling
//!
//! - **502 Bad Gateway** is retried after a fixed delay
//! - **429 Too Many Requests** honours `Retry-After` up to two minutes
//! - Any other non-success status becomes [`ClientError::Api`] carrying
//!   Spotify's own error message

use async_trait::async_trait;
use thiserror::Error;

use crate::{types::PlaybackState, voice::RepeatState};

pub mod auth;
pub mod client;

pub use client::SpotifyClient;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("spotify responded with {status}: {message}")]
    Api { status: u16, message: String },

    #[error("not authenticated: {0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait PlaylistClient: Send + Sync {
    /// Creates a private playlist and returns its id.
    async fn create_playlist(&self, name: &str) -> Result<String, ClientError>;

    /// Searches tracks and returns up to `limit` track URIs.
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<String>, ClientError>;

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), ClientError>;
}

#[async_trait]
pub trait PlaybackClient: Send + Sync {
    /// Starts playback of `context_uri`, or resumes the current context when `None`.
    async fn start_playback(&self, context_uri: Option<&str>) -> Result<(), ClientError>;

    async fn pause_playback(&self) -> Result<(), ClientError>;

    async fn next_track(&self) -> Result<(), ClientError>;

    async fn previous_track(&self) -> Result<(), ClientError>;

    /// Current playback state, `None` when no device is playing anything.
    async fn current_playback(&self) -> Result<Option<PlaybackState>, ClientError>;

    async fn set_shuffle(&self, state: bool) -> Result<(), ClientError>;

    async fn set_repeat(&self, state: RepeatState) -> Result<(), ClientError>;
}
