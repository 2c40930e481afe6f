//! Write ledger for overlap checks.

use pipeworks_core::Coords;
use std::collections::HashMap;

/// Records every coordinate written and the tick that wrote it.
///
/// A pipe cell must be written by exactly one placement. Feed each
/// placement into [`record`](WriteLedger::record) and check
/// [`overlaps`](WriteLedger::overlaps) at the end of a run.
#[derive(Clone, Debug, Default)]
pub struct WriteLedger {
    writes: HashMap<Coords, Vec<u64>>,
    total: usize,
}

impl WriteLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a write at `at` during `tick`.
    pub fn record(&mut self, at: Coords, tick: u64) {
        self.writes.entry(at).or_default().push(tick);
        self.total += 1;
    }

    /// Coordinates written more than once, with the ticks that wrote them.
    pub fn overlaps(&self) -> Vec<(Coords, Vec<u64>)> {
        let mut out: Vec<_> = self
            .writes
            .iter()
            .filter(|(_, ticks)| ticks.len() > 1)
            .map(|(c, ticks)| (*c, ticks.clone()))
            .collect();
        out.sort();
        out
    }

    /// Panic with the offending coordinates if any cell was written twice.
    pub fn assert_no_overlap(&self) {
        let overlaps = self.overlaps();
        assert!(overlaps.is_empty(), "cells written more than once: {overlaps:?}");
    }

    /// Number of distinct coordinates written.
    pub fn distinct(&self) -> usize {
        self.writes.len()
    }

    /// Number of writes recorded.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether `at` has been written at least once.
    pub fn contains(&self, at: Coords) -> bool {
        self.writes.contains_key(&at)
    }
}
