/// Track domain type
use serde::{Deserialize, Serialize};

/// A playable track as listed by the catalog endpoint
///
/// Field names on the wire follow the `/songs` response:
/// `filename`, `name`, `file`, `thumbnail`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// File name, unique and stable within a catalog
    #[serde(rename = "filename")]
    pub identifier: String,

    /// Human readable title
    #[serde(rename = "name")]
    pub display_name: String,

    /// URL the playback device loads
    #[serde(rename = "file")]
    pub media_url: String,

    /// URL of the cover image
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
}

impl Track {
    /// Create a new track
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        media_url: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            media_url: media_url.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }
}

// Identity is the file name; two records for the same file are the same track.
impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Track {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_names() {
        let json = r#"{
            "filename": "rain.mp3",
            "name": "rain",
            "file": "/static/songs/rain.mp3",
            "thumbnail": "/static/thumbnails/rain.jpg"
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.identifier, "rain.mp3");
        assert_eq!(track.display_name, "rain");
        assert_eq!(track.media_url, "/static/songs/rain.mp3");
        assert_eq!(track.thumbnail_url, "/static/thumbnails/rain.jpg");
    }

    #[test]
    fn equality_is_by_identifier() {
        let a = Track::new("a.mp3", "A", "/a", "/a.jpg");
        let renamed = Track::new("a.mp3", "Another title", "/elsewhere", "/b.jpg");
        let other = Track::new("b.mp3", "A", "/a", "/a.jpg");

        assert_eq!(a, renamed);
        assert_ne!(a, other);
    }
}
