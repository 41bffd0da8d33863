//! Intent dispatcher.
//!
//! Maps each [`VoiceIntent`] to exactly one [`Action`]. Unrecognized speech
//! maps to nothing: it is reported as unhandled and never reaches a client.

use crate::actions::{Action, ActionOutcome, MoodController, OperationError};

use super::{RepeatState, VoiceIntent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Handled(ActionOutcome),
    /// Transcript that matched no command; carries the raw text.
    Unhandled(String),
}

/// The action an intent stands for; unrecognized speech hands its text back.
pub fn action_for(intent: VoiceIntent) -> Result<Action, String> {
    let action = match intent {
        VoiceIntent::CreatePlaylist(request) => Action::CreatePlaylist(request),
        VoiceIntent::PlayPlaylist => Action::PlayPlaylist,
        VoiceIntent::Pause => Action::Pause,
        VoiceIntent::Resume => Action::Play,
        VoiceIntent::Next => Action::Next,
        VoiceIntent::Previous => Action::Previous,
        VoiceIntent::ShuffleOn => Action::SetShuffle(true),
        VoiceIntent::ShuffleOff => Action::SetShuffle(false),
        VoiceIntent::RepeatPlaylist => Action::SetRepeat(RepeatState::Context),
        VoiceIntent::RepeatTrack => Action::SetRepeat(RepeatState::Track),
        VoiceIntent::RepeatOff => Action::SetRepeat(RepeatState::Off),
        VoiceIntent::StopVoice => Action::StopVoice,
        VoiceIntent::Unrecognized(text) => return Err(text),
    };
    Ok(action)
}

/// Dispatches one intent and writes its result line.
///
/// Client failures come back as [`OperationError`]; an unrecognized
/// transcript is `Ok(Dispatch::Unhandled)`, not an error.
pub async fn dispatch(intent: VoiceIntent, controller: &MoodController) -> Result<Dispatch, OperationError> {
    match action_for(intent) {
        Ok(action) => controller.run(action).await.map(Dispatch::Handled),
        Err(text) => {
            controller
                .log()
                .warning(format!("Unrecognized voice command: {}", text));
            Ok(Dispatch::Unhandled(text))
        }
    }
}
