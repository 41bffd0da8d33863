use std::{
    fmt,
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard},
};

use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use super::StateError;
use crate::{config, failure, info, success, utils, warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// `HH:MM:SS` at the time of writing.
    pub at: String,
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at, self.message)
    }
}

#[derive(Debug, Default)]
struct Lines {
    entries: Vec<LogLine>,
    persisted: usize,
}

/// Append-only log of what the user asked for and what came of it.
///
/// Clones share the same buffer, so every task can hold its own handle.
/// Lines are echoed to the terminal unless the log was created silent.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    lines: Arc<Mutex<Lines>>,
    echo: bool,
    path: PathBuf,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ActivityLog {
    pub fn new(echo: bool) -> Self {
        Self {
            lines: Arc::new(Mutex::new(Lines::default())),
            echo,
            path: config::data_dir().join("activity.log"),
        }
    }

    /// A log that only buffers; nothing reaches the terminal.
    pub fn silent() -> Self {
        Self::new(false)
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(LogLevel::Info, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(LogLevel::Success, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(LogLevel::Warning, message.into());
    }

    pub fn failure(&self, message: impl Into<String>) {
        self.push(LogLevel::Failure, message.into());
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.guard().entries.clone()
    }

    /// Appends every line not yet written to the log file.
    ///
    /// The file is opened in append mode and only the pending lines are
    /// written, so several processes can share one log.
    pub async fn persist(&self) -> Result<(), StateError> {
        let (pending, total) = {
            let lines = self.guard();
            let pending: String = lines.entries[lines.persisted..]
                .iter()
                .map(|line| format!("{}\n", line))
                .collect();
            (pending, lines.entries.len())
        };

        if pending.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(pending.as_bytes()).await?;
        file.flush().await?;

        self.guard().persisted = total;
        Ok(())
    }

    fn push(&self, level: LogLevel, message: String) {
        if self.echo {
            match level {
                LogLevel::Info => info!("{}", message),
                LogLevel::Success => success!("{}", message),
                LogLevel::Warning => warning!("{}", message),
                LogLevel::Failure => failure!("{}", message),
            }
        }

        self.guard().entries.push(LogLine {
            at: utils::timestamp(),
            level,
            message,
        });
    }

    fn guard(&self) -> MutexGuard<'_, Lines> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
