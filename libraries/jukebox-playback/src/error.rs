//! Error types for playback sequencing

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Catalog position out of range
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Playlist does not exist or has no tracks
    #[error("Playlist empty: {0}")]
    PlaylistUnavailable(String),

    /// Playlist refers to files that are not in the catalog
    #[error("Some files from playlist {playlist:?} are missing in the songs folder ({missing} not found)")]
    MissingMedia { playlist: String, missing: usize },

    /// Playback device refused a request
    #[error("Playback device error: {0}")]
    Device(String),

    /// Playlist store error
    #[error(transparent)]
    Storage(#[from] jukebox_storage::StorageError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
