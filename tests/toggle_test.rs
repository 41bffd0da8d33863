use playurmood::types::PlaybackState;
use playurmood::voice::{RepeatState, next_repeat_state, next_shuffle_state};

#[test]
fn test_shuffle_flips() {
    assert!(next_shuffle_state(false));
    assert!(!next_shuffle_state(true));

    for state in [true, false] {
        assert_eq!(next_shuffle_state(next_shuffle_state(state)), state);
    }
}

#[test]
fn test_repeat_cycle() {
    assert_eq!(next_repeat_state(RepeatState::Off), RepeatState::Track);
    assert_eq!(next_repeat_state(RepeatState::Track), RepeatState::Context);
    assert_eq!(next_repeat_state(RepeatState::Context), RepeatState::Off);

    // Three toggles come back around
    for state in [RepeatState::Off, RepeatState::Track, RepeatState::Context] {
        let cycled = next_repeat_state(next_repeat_state(next_repeat_state(state)));
        assert_eq!(cycled, state);
    }
}

#[test]
fn test_repeat_api_values() {
    assert_eq!(RepeatState::from_api("context"), Some(RepeatState::Context));
    assert_eq!(RepeatState::from_api("bogus"), None);
    assert_eq!(RepeatState::Track.as_str(), "track");
    assert_eq!(RepeatState::default(), RepeatState::Off);
}

#[test]
fn test_playback_state_defaults() {
    let state: PlaybackState = serde_json::from_str(r#"{"is_playing": false}"#).unwrap();
    assert!(!state.shuffle());
    assert_eq!(state.repeat(), RepeatState::Off);
}

#[test]
fn test_playback_state_unknown_repeat_reads_as_off() {
    let state: PlaybackState = serde_json::from_str(
        r#"{"shuffle_state": true, "repeat_state": "sometimes", "is_playing": true}"#,
    )
    .unwrap();
    assert!(state.shuffle());
    assert_eq!(state.repeat(), RepeatState::Off);
}

#[test]
fn test_playback_state_known_repeat() {
    let state: PlaybackState =
        serde_json::from_str(r#"{"repeat_state": "track", "is_playing": true}"#).unwrap();
    assert_eq!(state.repeat(), RepeatState::Track);
    assert_eq!(next_repeat_state(state.repeat()), RepeatState::Context);
}
