use playurmood::utils::*;
use playurmood::voice::RepeatState;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    assert!(!challenge.is_empty());
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // URL-safe base64 without padding
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
    // SHA-256 is 32 bytes, 43 characters unpadded
    assert_eq!(challenge.len(), 43);
}

#[test]
fn test_timestamp_format() {
    let ts = timestamp();
    assert_eq!(ts.len(), 8);

    let parts: Vec<&str> = ts.split(':').collect();
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(|p| p.len() == 2 && p.parse::<u32>().is_ok()));
}

#[test]
fn test_playlist_context_uri() {
    assert_eq!(playlist_context_uri("37i9dQZF1DX"), "spotify:playlist:37i9dQZF1DX");
}

#[test]
fn test_non_blank() {
    assert_eq!(non_blank("  chill "), Some("chill".to_string()));
    assert_eq!(non_blank(""), None);
    assert_eq!(non_blank("   "), None);
}

#[test]
fn test_parse_repeat_state() {
    assert_eq!(parse_repeat_state("off"), Ok(RepeatState::Off));
    assert_eq!(parse_repeat_state("Track"), Ok(RepeatState::Track));
    assert_eq!(parse_repeat_state(" context "), Ok(RepeatState::Context));

    let err = parse_repeat_state("playlist").unwrap_err();
    assert!(err.contains("playlist"));
}
