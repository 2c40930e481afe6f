//! Test utilities and scripted fixtures for Pipeworks development.
//!
//! Provides a deterministic [`ScriptedRng`] implementing
//! [`StepRng`], a [`WriteLedger`](ledger::WriteLedger) for checking that
//! no cell is written twice, and small palette/grid fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod ledger;

pub use fixtures::{grid_with, mono_palette, palette_of};
pub use ledger::WriteLedger;

use pipeworks_core::StepRng;
use std::collections::VecDeque;

/// What a [`ScriptedRng`] answers once its script runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// Always `0`.
    Zero,
    /// Always `bound - 1`.
    Max,
}

/// A [`StepRng`] that replays a fixed script.
///
/// Scripted values are reduced modulo the requested bound, so a script
/// written for one grid size stays in range on another. Every bound the
/// caller asked for is recorded in [`bounds`](ScriptedRng::bounds) so tests
/// can assert on the draw sequence.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    script: VecDeque<u32>,
    fallback: Fallback,
    bounds: Vec<u32>,
}

impl ScriptedRng {
    /// Answers every draw with `0`.
    pub fn zeros() -> Self {
        Self::sequence(std::iter::empty(), Fallback::Zero)
    }

    /// Answers every draw with `bound - 1`.
    pub fn maxed() -> Self {
        Self::sequence(std::iter::empty(), Fallback::Max)
    }

    /// Replays `values` in order, then answers per `fallback`.
    pub fn sequence(values: impl IntoIterator<Item = u32>, fallback: Fallback) -> Self {
        Self {
            script: values.into_iter().collect(),
            fallback,
            bounds: Vec::new(),
        }
    }

    /// Bounds passed to each draw so far, oldest first.
    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }

    /// Number of draws so far.
    pub fn draws(&self) -> usize {
        self.bounds.len()
    }

    /// Scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl StepRng for ScriptedRng {
    fn below(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "StepRng::below called with a zero bound");
        self.bounds.push(bound);
        match self.script.pop_front() {
            Some(v) => v % bound,
            None => match self.fallback {
                Fallback::Zero => 0,
                Fallback::Max => bound - 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_and_maxed() {
        let mut z = ScriptedRng::zeros();
        let mut m = ScriptedRng::maxed();
        for bound in [1, 6, 40] {
            assert_eq!(z.below(bound), 0);
            assert_eq!(m.below(bound), bound - 1);
        }
        assert_eq!(z.bounds(), &[1, 6, 40]);
    }

    #[test]
    fn sequence_wraps_values_then_falls_back() {
        let mut rng = ScriptedRng::sequence([3, 9], Fallback::Max);
        assert_eq!(rng.below(5), 3);
        assert_eq!(rng.below(5), 4);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.below(7), 6);
        assert_eq!(rng.draws(), 3);
    }
}
