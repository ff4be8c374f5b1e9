/// Collaborator traits for Jukebox
use crate::error::Result;

/// String key-value persistence
///
/// Implementers back the playlist store: browser `localStorage`, a JSON file
/// on disk, or plain memory in tests. Every value is a complete serialized
/// document; writes replace the previous value wholesale.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read access to saved playlists by name
///
/// The sequencer activates playlists through this trait so it never owns
/// (or persists) the store itself.
pub trait PlaylistLookup {
    /// Track identifiers of the playlist called `name`, in playlist order
    fn playlist_tracks(&self, name: &str) -> Option<&[String]>;
}

impl PlaylistLookup for std::collections::HashMap<String, Vec<String>> {
    fn playlist_tracks(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(Vec::as_slice)
    }
}
