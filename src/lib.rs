//! PlayURMood Library
//!
//! Builds mood-based Spotify playlists and controls playback, either through
//! explicit commands or through spoken commands that are transcribed, parsed
//! into intents and dispatched against the Spotify Web API.
//!
//! # Modules
//!
//! - `actions` - Playlist and playback actions plus the task runner
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Token cache, session context and the activity log
//! - `request` - Playlist request construction and validation
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client and the client traits
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `voice` - Voice command grammar, dispatcher, toggles and session loop

pub mod actions;
pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod request;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod voice;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the outer edges of the application (CLI wiring, server start-up)
/// where the concrete error type does not matter to the caller.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Every line carries the local wall-clock time so the terminal output reads
/// as an append-only activity log.
///
/// # Example
///
/// ```
/// info!("Voice mode enabled");
/// info!("Voice command: {}", transcript);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] [{}] {}", $crate::utils::timestamp(), "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authentication successful!");
/// success!("Playlist '{}' created with {} tracks.", name, count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] [{}] {}", $crate::utils::timestamp(), "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a failure message with a red cross without stopping the program.
///
/// Used for actions that failed while the session keeps running.
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] [{}] {}", $crate::utils::timestamp(), "x".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for start-up failures where nothing useful can happen afterwards,
/// such as a missing token cache or an unreadable configuration.
///
/// # Example
///
/// ```
/// error!("Failed to load token. Please run playurmood auth");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] [{}] {}", $crate::utils::timestamp(), "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser. Please navigate to {}", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] [{}] {}", $crate::utils::timestamp(), "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
