use crate::{actions::Action, warning};

use super::setup::Runtime;

/// Runs one playback control (play, pause, skip, shuffle, repeat).
pub async fn playback(action: Action) {
    let runtime = Runtime::open().await;

    if let Err(e) = runtime.controller.spawn(action).await {
        warning!("Task join error: {}", e);
    }

    runtime.close().await;
}
