//! # Voice Module
//!
//! Everything between a spoken sentence and a Spotify call:
//!
//! ```text
//! SpeechEngine (open → calibrate → listen → transcribe)
//!          ↓ transcript
//! grammar::parse  →  VoiceIntent
//!          ↓
//! dispatch::dispatch  →  Action  →  MoodController
//! ```
//!
//! - [`grammar`] - Priority-ordered trigger matching and the create pattern
//! - [`dispatch`] - One action per intent; unrecognized speech is not an error
//! - [`toggle`] - Shuffle flip and the Off → Track → Context repeat cycle
//! - [`session`] - Start/stop state machine around the listen loop
//! - [`console`] - Line-per-utterance engine reading standard input

pub mod console;
pub mod dispatch;
pub mod grammar;
pub mod session;
pub mod toggle;

pub use console::ConsoleSpeechEngine;
pub use dispatch::{Dispatch, action_for, dispatch};
pub use grammar::{TRIGGERS, VoiceIntent, parse};
pub use session::{
    AudioSource, CaptureError, SpeechEngine, Utterance, VoiceSession, VoiceSessionState,
};
pub use toggle::{RepeatState, next_repeat_state, next_shuffle_state};
