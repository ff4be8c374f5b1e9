//! Track catalog
//!
//! The ordered, immutable list of tracks available for a session.

use crate::error::{JukeboxError, Result};
use crate::types::Track;
use std::collections::HashMap;

/// Ordered track catalog, indexable by position `0..len()`
///
/// Order is the order the catalog source returned. Identifiers are unique,
/// which is checked on construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(tracks.len());

        for (position, track) in tracks.iter().enumerate() {
            if positions.insert(track.identifier.clone(), position).is_some() {
                return Err(JukeboxError::Duplicate(track.identifier.clone()));
            }
        }

        Ok(Self { tracks, positions })
    }

    /// Parse a `/songs` response body
    pub fn from_json(json: &str) -> Result<Self> {
        let tracks: Vec<Track> = serde_json::from_str(json)?;
        Self::new(tracks)
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track at `position`
    pub fn get(&self, position: usize) -> Option<&Track> {
        self.tracks.get(position)
    }

    /// Catalog position of the track with `identifier`
    pub fn position_of(&self, identifier: &str) -> Option<usize> {
        self.positions.get(identifier).copied()
    }

    /// Whether `identifier` names a track in this catalog
    pub fn contains(&self, identifier: &str) -> bool {
        self.positions.contains_key(identifier)
    }

    /// Keep only the identifiers that resolve in this catalog, preserving order
    pub fn resolve<'a, I>(&self, identifiers: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        identifiers
            .into_iter()
            .filter(|id| self.contains(id))
            .cloned()
            .collect()
    }

    /// Iterate tracks in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// All tracks as a slice
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track::new(
            id,
            id.trim_end_matches(".mp3"),
            format!("/static/songs/{}", id),
            "/static/default.jpg",
        )
    }

    #[test]
    fn looks_up_positions_by_identifier() {
        let catalog = Catalog::new(vec![track("a.mp3"), track("b.mp3"), track("c.mp3")]).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position_of("c.mp3"), Some(2));
        assert_eq!(catalog.position_of("missing.mp3"), None);
        assert_eq!(catalog.get(1).unwrap().display_name, "b");
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let result = Catalog::new(vec![track("a.mp3"), track("a.mp3")]);

        assert!(matches!(result, Err(JukeboxError::Duplicate(id)) if id == "a.mp3"));
    }

    #[test]
    fn resolve_drops_unknown_identifiers_in_order() {
        let catalog = Catalog::new(vec![track("a.mp3"), track("b.mp3")]).unwrap();
        let wanted = vec![
            "b.mp3".to_string(),
            "gone.mp3".to_string(),
            "a.mp3".to_string(),
        ];

        assert_eq!(catalog.resolve(&wanted), vec!["b.mp3", "a.mp3"]);
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}
