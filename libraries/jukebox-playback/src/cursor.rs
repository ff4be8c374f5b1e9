//! Playlist cursor
//!
//! An ordered copy of a playlist's identifiers that forward navigation
//! follows while playlist mode is active.

use jukebox_core::Catalog;

/// Ordered identifiers of the active playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistCursor {
    tracks: Vec<String>,
}

impl PlaylistCursor {
    pub fn new(tracks: Vec<String>) -> Self {
        Self { tracks }
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.tracks.first().map(String::as_str)
    }

    /// Identifier following `current`
    ///
    /// When `current` is absent or not part of the playlist, the first
    /// identifier is returned. `None` means the playlist is exhausted.
    pub fn next_after(&self, current: Option<&str>) -> Option<&str> {
        let next = current
            .and_then(|id| self.tracks.iter().position(|t| t == id))
            .map_or(0, |pos| pos + 1);

        self.tracks.get(next).map(String::as_str)
    }

    /// Drop identifiers the catalog does not contain
    ///
    /// Returns how many were removed.
    pub fn retain_known(&mut self, catalog: &Catalog) -> usize {
        let before = self.tracks.len();
        self.tracks = catalog.resolve(&self.tracks);
        before - self.tracks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jukebox_core::Track;

    fn cursor(ids: &[&str]) -> PlaylistCursor {
        PlaylistCursor::new(ids.iter().map(|s| (*s).to_string()).collect())
    }

    #[test]
    fn next_after_walks_in_order() {
        let c = cursor(&["a", "b", "c"]);
        assert_eq!(c.next_after(Some("a")), Some("b"));
        assert_eq!(c.next_after(Some("b")), Some("c"));
        assert_eq!(c.next_after(Some("c")), None);
    }

    #[test]
    fn unknown_current_starts_over() {
        let c = cursor(&["a", "b"]);
        assert_eq!(c.next_after(None), Some("a"));
        assert_eq!(c.next_after(Some("zzz")), Some("a"));
    }

    #[test]
    fn retain_known_prunes_missing() {
        let catalog = Catalog::new(vec![
            Track::new("a", "a", "/a", "/t"),
            Track::new("c", "c", "/c", "/t"),
        ])
        .unwrap();

        let mut c = cursor(&["x", "a", "y", "c"]);
        assert_eq!(c.retain_known(&catalog), 2);
        assert_eq!(c.tracks(), &["a".to_string(), "c".to_string()]);
    }
}
