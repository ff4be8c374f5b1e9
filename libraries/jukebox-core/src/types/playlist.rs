/// Playlist domain type
use serde::{Deserialize, Serialize};

/// A named, ordered list of track identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist name
    pub name: String,

    /// Track identifiers in playback order
    pub tracks: Vec<String>,
}

impl Playlist {
    /// Create a new playlist
    pub fn new(name: impl Into<String>, tracks: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tracks,
        }
    }

    /// Number of tracks in the playlist
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist holds no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
