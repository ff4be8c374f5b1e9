//! Checked catalog rows used to build a playlist

use jukebox_core::Catalog;
use std::collections::BTreeSet;

/// Set of selected catalog positions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    rows: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, row: usize, selected: bool) {
        if selected {
            self.rows.insert(row);
        } else {
            self.rows.remove(&row);
        }
    }

    pub fn select_all(&mut self, catalog: &Catalog) {
        self.rows = (0..catalog.len()).collect();
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identifiers of selected tracks in catalog order
    pub fn identifiers(&self, catalog: &Catalog) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|&row| catalog.get(row))
            .map(|track| track.identifier.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jukebox_core::Track;

    fn catalog() -> Catalog {
        Catalog::new(
            ["a.mp3", "b.mp3", "c.mp3"]
                .iter()
                .map(|id| Track::new(*id, *id, format!("/{id}"), "/t"))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn identifiers_follow_catalog_order() {
        let mut selection = Selection::new();
        selection.set(2, true);
        selection.set(0, true);

        assert_eq!(selection.identifiers(&catalog()), vec!["a.mp3", "c.mp3"]);
    }

    #[test]
    fn select_all_then_uncheck() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.select_all(&catalog);
        selection.set(1, false);

        assert_eq!(selection.len(), 2);
        assert!(!selection.is_selected(1));
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn stale_rows_are_ignored() {
        let mut selection = Selection::new();
        selection.set(10, true);
        assert!(selection.identifiers(&catalog()).is_empty());
    }
}
