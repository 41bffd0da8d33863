use playurmood::request::{
    DEFAULT_MOOD, DEFAULT_USER_NAME, PlaylistForm, PlaylistRequest, ValidationError,
};

fn form(size: &str) -> PlaylistForm {
    PlaylistForm {
        user_name: "Ana".to_string(),
        mood: "happy".to_string(),
        artist: String::new(),
        language: String::new(),
        size: size.to_string(),
    }
}

#[test]
fn test_blank_form_uses_defaults() {
    let request = PlaylistRequest::try_from(PlaylistForm::default()).unwrap();

    assert_eq!(request.user_name(), DEFAULT_USER_NAME);
    assert_eq!(request.mood(), DEFAULT_MOOD);
    assert_eq!(request.size(), 10);
    assert_eq!(request.artist(), None);
    assert_eq!(request.language(), None);
    assert_eq!(request.playlist_name(), "Guest_popular_Mood");
}

#[test]
fn test_whitespace_fields_are_blank() {
    let request = PlaylistRequest::try_from(PlaylistForm {
        user_name: "   ".to_string(),
        mood: " chill ".to_string(),
        artist: "  ".to_string(),
        language: " spanish ".to_string(),
        size: " 5 ".to_string(),
    })
    .unwrap();

    assert_eq!(request.user_name(), DEFAULT_USER_NAME);
    assert_eq!(request.mood(), "chill");
    assert_eq!(request.artist(), None);
    assert_eq!(request.language(), Some("spanish"));
    assert_eq!(request.size(), 5);
}

#[test]
fn test_invalid_sizes() {
    for size in ["abc", "", "-3", "0", "2.5"] {
        let err = PlaylistRequest::try_from(form(size)).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSize(size.to_string()));
    }
}

#[test]
fn test_zero_size_rejected_directly() {
    assert!(PlaylistRequest::new("Ana", "happy", None, None, 0).is_err());
}

#[test]
fn test_playlist_name() {
    let request = PlaylistRequest::try_from(form("12")).unwrap();
    assert_eq!(request.playlist_name(), "Ana_happy_Mood");
    assert_eq!(request.size(), 12);
}

#[test]
fn test_search_query() {
    let full = PlaylistRequest::new("Ana", "happy", Some("taylor swift"), Some("english"), 10).unwrap();
    assert_eq!(full.search_query(), "happy taylor swift english");

    let mood_only = PlaylistRequest::new("Ana", "happy", None, None, 10).unwrap();
    assert_eq!(mood_only.search_query(), "happy");

    let artist_only = PlaylistRequest::new("Ana", "happy", Some("adele"), None, 10).unwrap();
    assert_eq!(artist_only.search_query(), "happy adele");

    // Absent artist keeps its separator
    let language_only = PlaylistRequest::new("Ana", "chill", None, Some("spanish"), 10).unwrap();
    assert_eq!(language_only.search_query(), "chill  spanish");
}
