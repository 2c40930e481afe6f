//! Benchmark profiles and utilities for the Pipeworks generator.
//!
//! Provides pre-built [`GeneratorConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: the classic 25x25x40 grid (25K cells), 4 colors
//! - [`stress_profile`]: 100x100x100 grid (1M cells) with long walks
//! - [`run_to_completion`]: tick an engine until its palette is used up

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pipeworks_core::GridDims;
use pipeworks_engine::{GeneratorConfig, GrowthEngine, SeededRng};

/// The default screensaver setup, seeded.
pub fn reference_profile(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        seed,
        ..Default::default()
    }
}

/// A large grid with a high segment cap, so walks run long and reseeds
/// are rare.
pub fn stress_profile(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        dims: GridDims::new(100, 100, 100),
        max_segments_per_color: 5_000,
        seed,
        ..Default::default()
    }
}

/// Build a seeded engine for `config`.
///
/// # Panics
///
/// Panics if `config` is invalid; profiles in this crate never are.
pub fn engine_for(config: &GeneratorConfig) -> GrowthEngine<SeededRng> {
    GrowthEngine::new(config, SeededRng::new(config.seed)).expect("benchmark profile is valid")
}

/// Tick until done, returning the number of ticks executed.
pub fn run_to_completion(engine: &mut GrowthEngine<SeededRng>) -> u64 {
    while !engine.is_done() {
        engine.tick();
    }
    engine.metrics().ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_valid() {
        assert!(reference_profile(0).validate().is_ok());
        assert!(stress_profile(0).validate().is_ok());
    }

    #[test]
    fn reference_run_finishes() {
        let mut engine = engine_for(&reference_profile(42));
        let ticks = run_to_completion(&mut engine);
        assert!(ticks > 0);
        // Four colors of at most 501 segments plus one closing tick each.
        assert!(ticks <= 4 * 502);
        assert!(engine.is_done());
    }
}
