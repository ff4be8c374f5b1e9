//! Playlist store
//!
//! Named playlists are created from a selection of catalog tracks, played,
//! and deleted. They are never edited in place: re-creating a name replaces
//! the whole list.

use crate::error::{Result, StorageError};
use jukebox_core::{KeyValueStore, Playlist, PlaylistLookup, PLAYLISTS_KEY};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Persistent mapping from playlist name to track identifiers
///
/// Playlists keep the order in which their names were first created. The
/// backing document is rewritten on every mutation.
#[derive(Debug)]
pub struct PlaylistStore<S: KeyValueStore> {
    backend: S,
    playlists: Vec<Playlist>,
}

impl<S: KeyValueStore> PlaylistStore<S> {
    /// Load the store from `backend`
    ///
    /// A missing key yields an empty store.
    pub fn open(backend: S) -> Result<Self> {
        let playlists = match backend.get(PLAYLISTS_KEY)? {
            Some(raw) => {
                let document: PlaylistDocument = serde_json::from_str(&raw).map_err(|e| {
                    tracing::warn!("Unreadable playlist store: {}", e);
                    StorageError::Corrupt(e.to_string())
                })?;
                document.0
            }
            None => Vec::new(),
        };

        tracing::debug!("Loaded {} playlists", playlists.len());

        Ok(Self { backend, playlists })
    }

    /// Save `tracks` under `name`, replacing any playlist with that name
    ///
    /// The name is trimmed. Returns the number of tracks saved.
    pub fn create(&mut self, name: &str, tracks: Vec<String>) -> Result<usize> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StorageError::EmptyName);
        }
        if tracks.is_empty() {
            return Err(StorageError::NothingSelected);
        }

        let count = tracks.len();
        let mut next = self.playlists.clone();
        match next.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.tracks = tracks,
            None => next.push(Playlist::new(name, tracks)),
        }

        self.commit(next)?;
        tracing::debug!("Saved playlist {:?} with {} tracks", name, count);

        Ok(count)
    }

    /// Remove the playlist called `name`
    ///
    /// Deleting a name that does not exist is not an error.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let next: Vec<Playlist> = self
            .playlists
            .iter()
            .filter(|p| p.name != name)
            .cloned()
            .collect();

        self.commit(next)
    }

    /// All playlists in creation order
    pub fn list(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Playlist called `name`
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.name == name)
    }

    /// Playlist names in creation order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.playlists.iter().map(|p| p.name.as_str())
    }

    /// Number of saved playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether no playlists are saved
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// The key-value backend
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Persist `next`, then make it the current state
    fn commit(&mut self, next: Vec<Playlist>) -> Result<()> {
        let json = serde_json::to_string(&PlaylistDocumentRef(&next))?;
        self.backend.set(PLAYLISTS_KEY, &json)?;
        self.playlists = next;
        Ok(())
    }
}

impl<S: KeyValueStore> PlaylistLookup for PlaylistStore<S> {
    fn playlist_tracks(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(|p| p.tracks.as_slice())
    }
}

/// Stored form: `{ "<name>": ["<identifier>", ...], ... }`
///
/// Object key order is kept on both read and write so playlists list in the
/// order they were created.
struct PlaylistDocument(Vec<Playlist>);

struct PlaylistDocumentRef<'a>(&'a [Playlist]);

impl Serialize for PlaylistDocumentRef<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for playlist in self.0 {
            map.serialize_entry(&playlist.name, &playlist.tracks)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PlaylistDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = PlaylistDocument;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of playlist names to track lists")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut playlists: Vec<Playlist> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));

                while let Some((name, tracks)) = access.next_entry::<String, Vec<String>>()? {
                    // A repeated key overwrites in place, as a JS object would
                    match playlists.iter_mut().find(|p| p.name == name) {
                        Some(existing) => existing.tracks = tracks,
                        None => playlists.push(Playlist::new(name, tracks)),
                    }
                }

                Ok(PlaylistDocument(playlists))
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn document_keeps_key_order() {
        let raw = r#"{"zulu": ["z.mp3"], "alpha": ["a.mp3"], "mike": ["m.mp3"]}"#;
        let store = PlaylistStore::open(MemoryStore::with_entry(PLAYLISTS_KEY, raw)).unwrap();

        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn serialized_document_is_a_name_to_list_object() {
        let mut store = PlaylistStore::open(MemoryStore::new()).unwrap();
        store.create("b", ids(&["2.mp3"])).unwrap();
        store.create("a", ids(&["1.mp3", "3.mp3"])).unwrap();

        let raw = store.backend().raw(PLAYLISTS_KEY).unwrap();
        assert_eq!(raw, r#"{"b":["2.mp3"],"a":["1.mp3","3.mp3"]}"#);
    }

    #[test]
    fn overwrite_keeps_original_slot() {
        let mut store = PlaylistStore::open(MemoryStore::new()).unwrap();
        store.create("first", ids(&["a.mp3"])).unwrap();
        store.create("second", ids(&["b.mp3"])).unwrap();
        store.create("first", ids(&["c.mp3", "d.mp3"])).unwrap();

        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(store.get("first").unwrap().tracks, ids(&["c.mp3", "d.mp3"]));
    }

    #[test]
    fn name_is_trimmed() {
        let mut store = PlaylistStore::open(MemoryStore::new()).unwrap();
        store.create("  chill  ", ids(&["a.mp3"])).unwrap();

        assert!(store.get("chill").is_some());
        assert!(store.get("  chill  ").is_none());
    }

    #[test]
    fn corrupt_document_is_reported() {
        let backend = MemoryStore::with_entry(PLAYLISTS_KEY, "not json");
        let result = PlaylistStore::open(backend);

        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn lookup_trait_resolves_tracks() {
        let mut store = PlaylistStore::open(MemoryStore::new()).unwrap();
        store.create("mix", ids(&["a.mp3", "b.mp3"])).unwrap();

        let lookup: &dyn PlaylistLookup = &store;
        assert_eq!(lookup.playlist_tracks("mix"), Some(&ids(&["a.mp3", "b.mp3"])[..]));
        assert_eq!(lookup.playlist_tracks("nope"), None);
    }
}
