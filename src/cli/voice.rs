use std::sync::Arc;

use crate::{
    config::VoiceSettings,
    error, info,
    voice::{ConsoleSpeechEngine, VoiceSession},
};

use super::setup::Runtime;

/// Listens for voice commands until "stop voice", end of input or Ctrl-C.
pub async fn voice() {
    let settings = match VoiceSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("{}", e),
    };

    let runtime = Runtime::open().await;
    let session = Arc::new(VoiceSession::new(
        Arc::new(ConsoleSpeechEngine::new()),
        Arc::clone(&runtime.controller),
        settings,
    ));

    info!("Type one command per line; press Ctrl-C to stop.");
    session.start().await;

    let watcher = Arc::clone(&session);
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            watcher.stop();
        }
    });

    session.join().await;
    ctrl_c.abort();

    runtime.close().await;
}
