//! Opinion Tally
//!
//! Count of cells per opinion, rebuilt every tick for reporting. The tally
//! is observational only and never feeds back into simulation state.

use std::collections::BTreeMap;

use crate::components::cell::Opinion;
use crate::components::grid::Grid;

/// Mapping from opinion to the number of cells holding it.
///
/// Lookups never fail: an unseen opinion counts as zero, and incrementing
/// one inserts a zero-initialized entry first. Iteration is in ascending
/// opinion order, so reports are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpinionTally {
    counts: BTreeMap<Opinion, usize>,
}

impl OpinionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally of every cell's current opinion, one increment per cell.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut tally = Self::new();
        for cell in grid.cells() {
            tally.increment(cell.state());
        }
        tally
    }

    /// Count for an opinion, zero if it has not been seen.
    pub fn get(&self, opinion: Opinion) -> usize {
        self.counts.get(&opinion).copied().unwrap_or(0)
    }

    /// Increment-or-initialize the count for an opinion.
    pub fn increment(&mut self, opinion: Opinion) {
        *self.counts.entry(opinion).or_default() += 1;
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// (opinion, count) pairs in ascending opinion order.
    pub fn counts(&self) -> impl Iterator<Item = (Opinion, usize)> + '_ {
        self.counts.iter().map(|(&opinion, &count)| (opinion, count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
