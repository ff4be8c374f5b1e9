//! Manual "play next" queue
//!
//! Holds catalog positions the listener explicitly asked for. Forward
//! navigation takes from the front, backward navigation from the back.

use jukebox_core::Catalog;
use std::collections::VecDeque;

/// FIFO of catalog positions with a LIFO escape hatch for "previous"
#[derive(Debug, Clone, Default)]
pub struct ManualQueue {
    positions: VecDeque<usize>,
}

impl ManualQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position; duplicates are allowed
    pub fn push(&mut self, position: usize) {
        self.positions.push_back(position);
    }

    /// Take the oldest entry
    pub fn pop_front(&mut self) -> Option<usize> {
        self.positions.pop_front()
    }

    /// Take the newest entry
    pub fn pop_back(&mut self) -> Option<usize> {
        self.positions.pop_back()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions in play order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    /// Display names of queued tracks, in play order
    pub fn display_names(&self, catalog: &Catalog) -> Vec<String> {
        self.positions
            .iter()
            .filter_map(|&pos| catalog.get(pos))
            .map(|track| track.display_name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_and_back_ends() {
        let mut queue = ManualQueue::new();
        queue.push(3);
        queue.push(1);
        queue.push(3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop_back(), Some(3));
        assert_eq!(queue.pop_front(), Some(3));
        assert_eq!(queue.pop_front(), Some(1));
        assert!(queue.is_empty());
        assert_eq!(queue.pop_back(), None);
    }

    #[test]
    fn clear_empties_queue() {
        let mut queue = ManualQueue::new();
        queue.push(0);
        queue.push(2);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.iter().count(), 0);
    }
}
