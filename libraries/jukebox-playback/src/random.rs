//! Random track picks for shuffle mode

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly random catalog positions
///
/// Injected into the sequencer so shuffle behaviour can be reproduced in
/// tests.
pub trait IndexSource {
    /// Pick a position in `0..len`
    ///
    /// Never called with `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// [`IndexSource`] backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngIndexSource<R: Rng = StdRng> {
    rng: R,
}

impl RngIndexSource<StdRng> {
    /// Seed from operating-system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible shuffles
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngIndexSource<R> {
    /// Wrap an existing generator
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexSource for RngIndexSource<R> {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of picks, wrapping around at the end
///
/// Each value is reduced modulo the requested length.
#[derive(Debug, Clone)]
pub struct SequenceIndexSource {
    values: Vec<usize>,
    next: usize,
}

impl SequenceIndexSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, next: 0 }
    }
}

impl IndexSource for SequenceIndexSource {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 || self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_source_stays_in_range() {
        let mut source = RngIndexSource::seeded(7);
        for len in 1..50 {
            assert!(source.next_index(len) < len);
        }
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = RngIndexSource::seeded(42);
        let mut b = RngIndexSource::seeded(42);
        let picks_a: Vec<usize> = (0..20).map(|_| a.next_index(10)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.next_index(10)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn sequence_source_wraps_and_reduces() {
        let mut source = SequenceIndexSource::new(vec![1, 7]);
        assert_eq!(source.next_index(5), 1);
        assert_eq!(source.next_index(5), 2);
        assert_eq!(source.next_index(5), 1);
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut source = SequenceIndexSource::new(Vec::new());
        assert_eq!(source.next_index(3), 0);
    }
}
