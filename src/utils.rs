use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Local;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::voice::RepeatState;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Wall-clock time in the `HH:MM:SS` form used by every log line.
pub fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Context URI Spotify expects when starting playback of a playlist.
pub fn playlist_context_uri(playlist_id: &str) -> String {
    format!("spotify:playlist:{}", playlist_id)
}

/// Trims a free-text field and treats blank input as absent.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// clap value parser for `--state off|track|context`.
pub fn parse_repeat_state(value: &str) -> Result<RepeatState, String> {
    RepeatState::from_api(&value.trim().to_lowercase())
        .ok_or_else(|| format!("invalid repeat state '{}', expected off, track or context", value))
}
