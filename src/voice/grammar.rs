//! Voice command grammar.
//!
//! Turns one lower-cased transcript into a [`VoiceIntent`]. Triggers are
//! plain substring checks evaluated in a fixed priority order; the first one
//! found wins. So "next" matches anywhere, even inside another word.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::request::{PlaylistRequest, VOICE_USER_NAME};

const CREATE_TRIGGER: &str = "create";

static CREATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"create (\d+) (.+?) songs(?: by (.+?))?(?: in (.+?))?$")
        .expect("create pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceIntent {
    CreatePlaylist(PlaylistRequest),
    PlayPlaylist,
    Pause,
    Resume,
    Next,
    Previous,
    ShuffleOn,
    ShuffleOff,
    RepeatPlaylist,
    RepeatTrack,
    RepeatOff,
    StopVoice,
    Unrecognized(String),
}

/// Literal triggers after "create", in priority order.
pub static TRIGGERS: [(&str, VoiceIntent); 11] = [
    ("play playlist", VoiceIntent::PlayPlaylist),
    ("pause", VoiceIntent::Pause),
    ("resume", VoiceIntent::Resume),
    ("next", VoiceIntent::Next),
    ("previous", VoiceIntent::Previous),
    ("shuffle on", VoiceIntent::ShuffleOn),
    ("shuffle off", VoiceIntent::ShuffleOff),
    ("repeat playlist", VoiceIntent::RepeatPlaylist),
    ("repeat track", VoiceIntent::RepeatTrack),
    ("repeat off", VoiceIntent::RepeatOff),
    ("stop voice", VoiceIntent::StopVoice),
];

/// Parses a transcript into an intent.
///
/// A transcript containing "create" is a create command or nothing: when the
/// structured `create <n> <mood> songs [by <artist>] [in <language>]` shape
/// does not match, the result is [`VoiceIntent::Unrecognized`] and no other
/// trigger is tried.
pub fn parse(transcript: &str) -> VoiceIntent {
    if transcript.contains(CREATE_TRIGGER) {
        return parse_create(transcript)
            .map(VoiceIntent::CreatePlaylist)
            .unwrap_or_else(|| VoiceIntent::Unrecognized(transcript.to_string()));
    }

    TRIGGERS
        .iter()
        .find(|(trigger, _)| transcript.contains(trigger))
        .map(|(_, intent)| intent.clone())
        .unwrap_or_else(|| VoiceIntent::Unrecognized(transcript.to_string()))
}

fn parse_create(transcript: &str) -> Option<PlaylistRequest> {
    let caps = CREATE_PATTERN.captures(transcript)?;

    // Digits that overflow or spell zero are not a valid size.
    let size = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let mood = caps.get(2)?.as_str().trim();
    let artist = caps.get(3).map(|m| m.as_str().trim());
    let language = caps.get(4).map(|m| m.as_str().trim());

    PlaylistRequest::new(VOICE_USER_NAME, mood, artist, language, size).ok()
}

impl VoiceIntent {
    /// Short action name used in log lines and the command reference.
    pub fn name(&self) -> &'static str {
        match self {
            VoiceIntent::CreatePlaylist(_) => "create playlist",
            VoiceIntent::PlayPlaylist => "play playlist",
            VoiceIntent::Pause => "pause",
            VoiceIntent::Resume => "resume",
            VoiceIntent::Next => "next track",
            VoiceIntent::Previous => "previous track",
            VoiceIntent::ShuffleOn => "shuffle on",
            VoiceIntent::ShuffleOff => "shuffle off",
            VoiceIntent::RepeatPlaylist => "repeat playlist",
            VoiceIntent::RepeatTrack => "repeat track",
            VoiceIntent::RepeatOff => "repeat off",
            VoiceIntent::StopVoice => "stop voice",
            VoiceIntent::Unrecognized(_) => "unrecognized",
        }
    }
}

impl fmt::Display for VoiceIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoiceIntent::CreatePlaylist(request) => write!(
                f,
                "create {} {} songs{}{}",
                request.size(),
                request.mood(),
                request
                    .artist()
                    .map(|a| format!(" by {}", a))
                    .unwrap_or_default(),
                request
                    .language()
                    .map(|l| format!(" in {}", l))
                    .unwrap_or_default()
            ),
            VoiceIntent::Unrecognized(text) => write!(f, "unrecognized: {}", text),
            other => f.write_str(other.name()),
        }
    }
}
