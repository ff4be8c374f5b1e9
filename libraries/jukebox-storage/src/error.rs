/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Playlist name is blank after trimming
    #[error("Enter a playlist name")]
    EmptyName,

    /// No tracks were given for a new playlist
    #[error("Select some songs first")]
    NothingSelected,

    /// The persisted document could not be read back
    #[error("Corrupt playlist store: {0}")]
    Corrupt(String),

    /// Serialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Key-value backend error
    #[error(transparent)]
    Backend(#[from] jukebox_core::JukeboxError),
}
