//! Catalog parsing tests
//!
//! The catalog arrives as the JSON body of the `/songs` endpoint.

use jukebox_core::{Catalog, JukeboxError};

#[test]
fn parses_songs_response_in_server_order() {
    let body = r#"[
        {"filename": "b.ogg", "name": "b", "file": "/static/songs/b.ogg", "thumbnail": "/static/default.jpg"},
        {"filename": "a.mp3", "name": "a", "file": "/static/songs/a.mp3", "thumbnail": "/static/thumbnails/a.jpg"}
    ]"#;

    let catalog = Catalog::from_json(body).expect("valid catalog");

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(0).unwrap().identifier, "b.ogg");
    assert_eq!(catalog.position_of("a.mp3"), Some(1));
}

#[test]
fn empty_response_is_an_empty_catalog() {
    let catalog = Catalog::from_json("[]").expect("valid catalog");
    assert!(catalog.is_empty());
}

#[test]
fn malformed_response_is_a_serialization_error() {
    let result = Catalog::from_json(r#"{"songs": []}"#);
    assert!(matches!(result, Err(JukeboxError::Serialization(_))));
}

#[test]
fn duplicate_filenames_are_rejected() {
    let body = r#"[
        {"filename": "a.mp3", "name": "a", "file": "/1", "thumbnail": "/t"},
        {"filename": "a.mp3", "name": "a again", "file": "/2", "thumbnail": "/t"}
    ]"#;

    assert!(matches!(
        Catalog::from_json(body),
        Err(JukeboxError::Duplicate(_))
    ));
}
