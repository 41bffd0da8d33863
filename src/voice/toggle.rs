//! Shuffle and repeat toggle policies.
//!
//! The playback client owns the toggle state. Callers read it fresh before
//! every toggle and feed it through these functions; nothing is cached here.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatState {
    #[default]
    Off,
    Track,
    Context,
}

impl RepeatState {
    /// Value used by the Spotify API.
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatState::Off => "off",
            RepeatState::Track => "track",
            RepeatState::Context => "context",
        }
    }

    pub fn from_api(value: &str) -> Option<Self> {
        match value {
            "off" => Some(RepeatState::Off),
            "track" => Some(RepeatState::Track),
            "context" => Some(RepeatState::Context),
            _ => None,
        }
    }
}

impl fmt::Display for RepeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn next_shuffle_state(current: bool) -> bool {
    !current
}

/// Off → Track → Context → Off.
pub fn next_repeat_state(current: RepeatState) -> RepeatState {
    match current {
        RepeatState::Off => RepeatState::Track,
        RepeatState::Track => RepeatState::Context,
        RepeatState::Context => RepeatState::Off,
    }
}
