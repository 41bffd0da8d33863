use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    actions::Action,
    management::ActivityLog,
    request::{PlaylistForm, PlaylistRequest},
    warning,
};

use super::setup::Runtime;

/// Creates a playlist from the manual form fields.
/// The form is validated before the token cache is touched, so a bad size is
/// reported as such even when not yet authenticated.
pub async fn create(form: PlaylistForm) {
    let request = match PlaylistRequest::try_from(form) {
        Ok(request) => request,
        Err(e) => {
            let log = ActivityLog::default();
            log.failure(e.to_string());
            if let Err(e) = log.persist().await {
                warning!("Failed to write activity log: {}", e);
            }
            return;
        }
    };

    let runtime = Runtime::open().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Creating playlist {}...", request.playlist_name()));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let handle = runtime.controller.spawn(Action::CreatePlaylist(request));
    let joined = handle.await;
    pb.finish_and_clear();

    if let Err(e) = joined {
        warning!("Task join error: {}", e);
    }

    runtime.close().await;
}

/// Starts playback of the playlist created last.
pub async fn play_playlist(playlist_id: Option<String>) {
    let runtime = Runtime::open().await;
    if let Some(id) = playlist_id {
        runtime.controller.context().set_current_playlist(id);
    }

    if let Err(e) = runtime.controller.spawn(Action::PlayPlaylist).await {
        warning!("Task join error: {}", e);
    }

    runtime.close().await;
}
