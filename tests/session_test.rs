mod common;

use common::{Call, FakeSpotify, ScriptedEngine, Step, controller};
use playurmood::config::VoiceSettings;
use playurmood::management::LogLevel;
use playurmood::voice::{CaptureError, VoiceSession, VoiceSessionState};

fn session(engine: &std::sync::Arc<ScriptedEngine>, fake: &std::sync::Arc<FakeSpotify>) -> VoiceSession {
    VoiceSession::new(engine.clone(), controller(fake), VoiceSettings::default())
}

#[tokio::test]
async fn test_session_dispatches_until_source_closes() {
    let fake = FakeSpotify::new();
    let engine = ScriptedEngine::new(vec![Step::Say("PAUSE"), Step::Say("next")]);
    let session = session(&engine, &fake);

    assert_eq!(session.state(), VoiceSessionState::Inactive);
    assert!(session.start().await);
    assert_eq!(session.state(), VoiceSessionState::Listening);

    session.join().await;

    assert_eq!(session.state(), VoiceSessionState::Inactive);
    assert_eq!(fake.calls(), vec![Call::PausePlayback, Call::NextTrack]);
    // Two commands, then the closed source
    assert_eq!(engine.listen_count(), 3);
}

#[tokio::test]
async fn test_stop_voice_command_ends_loop() {
    let fake = FakeSpotify::new();
    let engine = ScriptedEngine::new(vec![
        Step::Say("pause"),
        Step::Say("stop voice"),
        Step::Say("next"),
    ]);
    let session = session(&engine, &fake);

    assert!(session.start().await);
    session.join().await;

    assert_eq!(session.state(), VoiceSessionState::Inactive);
    assert_eq!(fake.calls(), vec![Call::PausePlayback]);
    assert_eq!(engine.listen_count(), 2);
}

#[tokio::test]
async fn test_transient_errors_keep_listening() {
    let fake = FakeSpotify::new();
    let engine = ScriptedEngine::new(vec![
        Step::Fail(CaptureError::Timeout),
        Step::Fail(CaptureError::Unintelligible),
        Step::Say("next"),
    ]);
    let session = session(&engine, &fake);

    assert!(session.start().await);
    session.join().await;

    assert_eq!(fake.calls(), vec![Call::NextTrack]);
    assert_eq!(engine.listen_count(), 4);
}

#[tokio::test]
async fn test_device_error_is_logged_and_loop_continues() {
    let fake = FakeSpotify::new();
    let engine = ScriptedEngine::new(vec![
        Step::Fail(CaptureError::Device("glitch".to_string())),
        Step::Say("pause"),
    ]);
    let controller = controller(&fake);
    let session = VoiceSession::new(engine.clone(), controller.clone(), VoiceSettings::default());

    assert!(session.start().await);
    session.join().await;

    assert_eq!(fake.calls(), vec![Call::PausePlayback]);
    assert!(controller.log().lines().iter().any(|line| {
        line.level == LogLevel::Failure && line.message.contains("glitch")
    }));
}

#[tokio::test]
async fn test_unrecognized_speech_is_skipped() {
    let fake = FakeSpotify::new();
    let engine = ScriptedEngine::new(vec![Step::Say("make it louder"), Step::Say("previous")]);
    let session = session(&engine, &fake);

    assert!(session.start().await);
    session.join().await;

    assert_eq!(fake.calls(), vec![Call::PreviousTrack]);
}

#[tokio::test]
async fn test_second_start_is_rejected() {
    let fake = FakeSpotify::new();
    let engine = ScriptedEngine::new(vec![Step::Say("pause")]);
    let session = session(&engine, &fake);

    assert!(session.start().await);
    assert!(!session.start().await);

    // Stopped before the loop got to listen
    session.stop();
    session.stop();
    session.join().await;

    assert_eq!(session.state(), VoiceSessionState::Inactive);
    assert_eq!(engine.listen_count(), 0);
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_open_failure_deactivates() {
    let fake = FakeSpotify::new();
    let engine = ScriptedEngine::new(vec![]);
    let controller = controller(&fake);
    let session = VoiceSession::new(engine.clone(), controller.clone(), VoiceSettings::default());

    // First run consumes the script and closes on its own
    assert!(session.start().await);
    session.join().await;

    // The scripted engine refuses to open twice
    assert!(session.start().await);
    session.join().await;

    assert_eq!(session.state(), VoiceSessionState::Inactive);
    let last = controller.log().lines().pop().unwrap();
    assert_eq!(last.level, LogLevel::Failure);
    assert!(last.message.starts_with("Voice error:"));
}

#[tokio::test]
async fn test_join_without_start_returns() {
    let fake = FakeSpotify::new();
    let engine = ScriptedEngine::new(vec![]);
    let session = session(&engine, &fake);

    session.join().await;
    assert_eq!(session.state(), VoiceSessionState::Inactive);
}
