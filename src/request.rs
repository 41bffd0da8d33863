//! Playlist requests.
//!
//! A [`PlaylistRequest`] is the only input of playlist creation. It is built
//! either from the manual form fields ([`PlaylistForm`]) or from a parsed voice
//! command, and cannot be changed once constructed.

use std::num::NonZeroU32;

use thiserror::Error;

use crate::utils;

pub const DEFAULT_USER_NAME: &str = "Guest";
pub const DEFAULT_MOOD: &str = "popular";
pub const DEFAULT_PLAYLIST_SIZE: u32 = 10;
/// User name stamped on requests that came from a voice command.
pub const VOICE_USER_NAME: &str = "VoiceUser";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid playlist size: {0:?}")]
    InvalidSize(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRequest {
    user_name: String,
    mood: String,
    artist: Option<String>,
    language: Option<String>,
    size: NonZeroU32,
}

impl PlaylistRequest {
    /// Builds a request, rejecting a size of zero.
    ///
    /// Blank user names and moods fall back to their defaults; blank artist
    /// and language values are treated as absent.
    pub fn new(
        user_name: &str,
        mood: &str,
        artist: Option<&str>,
        language: Option<&str>,
        size: u32,
    ) -> Result<Self, ValidationError> {
        let size = NonZeroU32::new(size).ok_or_else(|| ValidationError::InvalidSize(size.to_string()))?;

        Ok(Self {
            user_name: utils::non_blank(user_name).unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
            mood: utils::non_blank(mood).unwrap_or_else(|| DEFAULT_MOOD.to_string()),
            artist: artist.and_then(utils::non_blank),
            language: language.and_then(utils::non_blank),
            size,
        })
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn size(&self) -> u32 {
        self.size.get()
    }

    /// Name of the playlist this request creates: `{user}_{mood}_Mood`.
    pub fn playlist_name(&self) -> String {
        format!("{}_{}_Mood", self.user_name, self.mood)
    }

    /// Track search query: mood, artist and language joined by single spaces
    /// and trimmed. An absent artist still contributes its separator, so
    /// `chill` + `spanish` yields `"chill  spanish"`.
    pub fn search_query(&self) -> String {
        format!(
            "{} {} {}",
            self.mood,
            self.artist.as_deref().unwrap_or_default(),
            self.language.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}

/// Raw manual-entry fields, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistForm {
    pub user_name: String,
    pub mood: String,
    pub artist: String,
    pub language: String,
    pub size: String,
}

impl Default for PlaylistForm {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            mood: String::new(),
            artist: String::new(),
            language: String::new(),
            size: DEFAULT_PLAYLIST_SIZE.to_string(),
        }
    }
}

impl TryFrom<PlaylistForm> for PlaylistRequest {
    type Error = ValidationError;

    fn try_from(form: PlaylistForm) -> Result<Self, Self::Error> {
        let size = form
            .size
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidSize(form.size.clone()))?;

        PlaylistRequest::new(
            &form.user_name,
            &form.mood,
            Some(form.artist.as_str()),
            Some(form.language.as_str()),
            size,
        )
        .map_err(|_| ValidationError::InvalidSize(form.size.clone()))
    }
}
