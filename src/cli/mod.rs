//! # CLI Module
//!
//! Command-line front end of PlayURMood. Each subcommand opens a runtime
//! (token cache, last session, activity log), launches its action as a task,
//! waits for it, and saves the session state before exiting.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth authentication with PKCE
//! - [`create`] - Build a playlist from mood, artist, language and size
//! - [`play_playlist`] - Play the playlist created last
//! - [`playback`] - Play, pause, skip, shuffle and repeat controls
//! - [`voice`] - Continuous voice command session
//! - [`commands`] - Reference table of the voice commands
//!
//! ## Usage Patterns
//!
//! ```bash
//! playurmood auth
//! playurmood create --mood happy --artist "taylor swift" --size 15
//! playurmood play-playlist
//! playurmood shuffle
//! playurmood voice
//! ```

mod auth;
mod commands;
mod playback;
mod playlist;
mod setup;
mod voice;

pub use auth::auth;
pub use commands::commands;
pub use playback::playback;
pub use playlist::create;
pub use playlist::play_playlist;
pub use voice::voice;
