use std::{
    path::PathBuf,
    sync::{
        RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid state file: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// State shared by the action tasks and the voice loop.
///
/// Each field has a single writer: playlist creation sets the current
/// playlist, the voice session controller (or a StopVoice command) flips the
/// voice flag. Readers may observe a slightly stale value.
#[derive(Debug, Default)]
pub struct SessionContext {
    current_playlist: RwLock<Option<String>>,
    /// Set once this process has chosen a playlist of its own.
    playlist_changed: AtomicBool,
    voice_active: AtomicBool,
}

impl SessionContext {
    pub fn new(current_playlist: Option<String>) -> Self {
        Self {
            current_playlist: RwLock::new(current_playlist),
            playlist_changed: AtomicBool::new(false),
            voice_active: AtomicBool::new(false),
        }
    }

    pub fn current_playlist(&self) -> Option<String> {
        self.current_playlist
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set_current_playlist(&self, playlist_id: String) {
        *self
            .current_playlist
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(playlist_id);
        self.playlist_changed.store(true, Ordering::Release);
    }

    /// True when the current playlist differs from the one loaded at startup.
    pub fn playlist_changed(&self) -> bool {
        self.playlist_changed.load(Ordering::Acquire)
    }

    pub fn voice_active(&self) -> bool {
        self.voice_active.load(Ordering::Acquire)
    }

    pub fn set_voice_active(&self, active: bool) {
        self.voice_active.store(active, Ordering::Release);
    }

    /// Flips the voice flag from inactive to active; false if it already was.
    pub fn activate_voice(&self) -> bool {
        self.voice_active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_playlist_id: self.current_playlist(),
            updated_at: Utc::now().timestamp(),
        }
    }
}

/// What survives between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub current_playlist_id: Option<String>,
    pub updated_at: i64,
}

pub struct SessionStore {
    path: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(config::data_dir().join("state/session.json"))
    }
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the last snapshot; a missing file is an empty session.
    pub async fn load(&self) -> Result<SessionSnapshot, StateError> {
        let json = match async_fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SessionSnapshot::default());
            }
            Err(e) => return Err(StateError::IoError(e)),
        };
        Ok(serde_json::from_str(&json)?)
    }

    /// Persists the context's playlist only if this process changed it, so a
    /// long-running session never writes back the id it started with.
    /// Returns whether anything was written.
    pub async fn save(&self, context: &SessionContext) -> Result<bool, StateError> {
        if !context.playlist_changed() {
            return Ok(false);
        }
        self.persist(&context.snapshot()).await?;
        Ok(true)
    }

    pub async fn persist(&self, snapshot: &SessionSnapshot) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}
