use std::sync::Arc;

use crate::{
    actions::MoodController,
    error,
    management::{ActivityLog, SessionContext, SessionStore},
    spotify::SpotifyClient,
    warning,
};

/// Everything one invocation needs: the controller, and the store the
/// current playlist id is saved to when the invocation ends.
pub(crate) struct Runtime {
    pub controller: Arc<MoodController>,
    store: SessionStore,
}

impl Runtime {
    /// Loads the token cache and the last session. Exits when there is no token.
    pub async fn open() -> Self {
        let client = match SpotifyClient::from_cache().await {
            Ok(client) => Arc::new(client),
            Err(e) => error!("{}", e),
        };

        let store = SessionStore::default();
        let snapshot = store.load().await.unwrap_or_else(|e| {
            warning!("Ignoring unreadable session state: {}", e);
            Default::default()
        });

        let context = Arc::new(SessionContext::new(snapshot.current_playlist_id));
        let controller = Arc::new(MoodController::new(
            client.clone(),
            client,
            context,
            ActivityLog::default(),
        ));

        Self { controller, store }
    }

    pub fn log(&self) -> &ActivityLog {
        self.controller.log()
    }

    /// Saves the session state and appends this run's lines to the activity log file.
    pub async fn close(self) {
        if let Err(e) = self.store.save(self.controller.context()).await {
            warning!("Failed to save session state: {}", e);
        }
        if let Err(e) = self.controller.log().persist().await {
            warning!("Failed to write activity log: {}", e);
        }
    }
}
