//! Configuration management for PlayURMood.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Spotify endpoints and the local callback server
//! have sensible defaults; only the client id has to be supplied by the user.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use thiserror::Error;

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8080/callback";
const DEFAULT_SCOPE: &str = "playlist-modify-public playlist-modify-private user-read-playback-state user-modify-playback-state";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("Cannot load environment file: {0}")]
    Load(String),
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `playurmood/.env` under the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/playurmood/.env`
/// - macOS: `~/Library/Application Support/playurmood/.env`
/// - Windows: `%LOCALAPPDATA%/playurmood/.env`
///
/// Variables that are already present in the process environment are not
/// overridden.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the `.env` file
/// cannot be read or parsed.
pub async fn load_env() -> Result<(), ConfigError> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| ConfigError::Load(e.to_string()))?;
    }

    dotenv::from_path(&path).map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    Ok(())
}

/// Root of everything PlayURMood keeps on disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playurmood");
    path
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn or_default(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn seconds(key: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

/// Returns the address the local OAuth callback server binds to.
pub fn server_addr() -> String {
    or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the Spotify user id used for playlist creation, when configured.
///
/// When unset the client asks Spotify for the current user instead.
pub fn spotify_user() -> Option<String> {
    env::var("SPOTIFY_USER_ID")
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Returns the Spotify API client ID for authentication.
///
/// # Errors
///
/// Fails with [`ConfigError::Missing`] if `SPOTIFY_API_AUTH_CLIENT_ID` is not set.
pub fn spotify_client_id() -> Result<String, ConfigError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify OAuth redirect URI.
///
/// This must match the redirect URI registered in the Spotify application settings.
pub fn spotify_redirect_uri() -> String {
    or_default("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Returns the Spotify API scope permissions.
pub fn spotify_scope() -> String {
    or_default("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> String {
    or_default("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Returns the Spotify Web API base URL.
pub fn spotify_apiurl() -> String {
    or_default("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> String {
    or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Timing bounds for the voice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceSettings {
    /// How long to wait for speech to begin before giving up on one capture.
    pub listen_timeout: Duration,
    /// Maximum duration of a single utterance.
    pub phrase_time_limit: Duration,
    /// Length of the ambient-noise calibration step.
    pub calibration: Duration,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            listen_timeout: Duration::from_secs(5),
            phrase_time_limit: Duration::from_secs(5),
            calibration: Duration::from_secs(1),
        }
    }
}

impl VoiceSettings {
    /// Reads `VOICE_LISTEN_TIMEOUT_SECS`, `VOICE_PHRASE_TIME_LIMIT_SECS` and
    /// `VOICE_CALIBRATION_SECS`, falling back to 5, 5 and 1 seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            listen_timeout: seconds("VOICE_LISTEN_TIMEOUT_SECS", 5)?,
            phrase_time_limit: seconds("VOICE_PHRASE_TIME_LIMIT_SECS", 5)?,
            calibration: seconds("VOICE_CALIBRATION_SECS", 1)?,
        })
    }
}
