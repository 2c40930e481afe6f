//! The generator facade.
//!
//! [`PipeGenerator`] bundles a seeded [`GrowthEngine`] with a
//! [`FixedStepScheduler`] behind the interface a screensaver frame loop
//! needs: feed it frame time, then read cells to draw.
//!
//! # Ownership model
//!
//! [`advance`](PipeGenerator::advance) takes `&mut self` and every query
//! takes `&self`, so a renderer holding a borrow of the grid cannot overlap
//! with a tick. No threads are involved.

use pipeworks_core::{Cell, Coords, Palette};
use pipeworks_grid::{Probe, VoxelGrid};

use crate::config::{ConfigError, GeneratorConfig};
use crate::growth::{GrowthEngine, TickOutcome};
use crate::metrics::GenerationMetrics;
use crate::rng::SeededRng;
use crate::scheduler::{AdvanceReport, FixedStepScheduler};
use crate::walker::WalkerState;

/// A self-pacing pipe generator.
///
/// # Examples
///
/// ```
/// use pipeworks_core::GridDims;
/// use pipeworks_engine::{GeneratorConfig, PipeGenerator};
///
/// let config = GeneratorConfig {
///     dims: GridDims::new(8, 8, 8),
///     seed: 7,
///     ..Default::default()
/// };
/// let mut generator = PipeGenerator::new(config).unwrap();
/// let report = generator.advance(1.0);
/// assert!(report.ticks <= 30);
/// assert!(generator.grid().occupied_count() > 0);
/// ```
#[derive(Debug)]
pub struct PipeGenerator {
    engine: GrowthEngine<SeededRng>,
    scheduler: FixedStepScheduler,
    config: GeneratorConfig,
}

impl PipeGenerator {
    /// Validate `config` and start a run seeded from `config.seed`.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        let engine = GrowthEngine::new(&config, SeededRng::new(config.seed))?;
        let scheduler = FixedStepScheduler::new(config.scheduler.clone())?;
        Ok(Self {
            engine,
            scheduler,
            config,
        })
    }

    /// Feed `dt_seconds` of elapsed time and run the ticks now due.
    pub fn advance(&mut self, dt_seconds: f64) -> AdvanceReport<TickOutcome> {
        self.scheduler.advance(dt_seconds, &mut self.engine)
    }

    /// Throw the current run away and start a fresh one from `seed`.
    ///
    /// Clears the grid, metrics, and any unspent frame time.
    pub fn reset(&mut self, seed: u64) {
        self.config.seed = seed;
        self.engine.reset_with(SeededRng::new(seed));
        self.scheduler.reset();
    }

    /// The cell at `at`; out-of-range coordinates read as
    /// [`Cell::OUT_OF_BOUNDS`].
    pub fn get_cell(&self, at: Coords) -> Cell {
        self.engine.grid().get(at)
    }

    /// Bounds-aware cell lookup.
    pub fn probe(&self, at: Coords) -> Probe {
        self.engine.grid().probe(at)
    }

    /// Whether generation has finished.
    pub fn is_done(&self) -> bool {
        self.engine.is_done()
    }

    /// The grid.
    pub fn grid(&self) -> &VoxelGrid {
        self.engine.grid()
    }

    /// The walker.
    pub fn walker(&self) -> &WalkerState {
        self.engine.walker()
    }

    /// The palette in use.
    pub fn palette(&self) -> &Palette {
        self.engine.palette()
    }

    /// Cumulative counters.
    pub fn metrics(&self) -> &GenerationMetrics {
        self.engine.metrics()
    }

    /// Seed of the current run.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Configuration of the current run.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The underlying engine.
    pub fn engine(&self) -> &GrowthEngine<SeededRng> {
        &self.engine
    }

    /// The underlying scheduler.
    pub fn scheduler(&self) -> &FixedStepScheduler {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeworks_core::GridDims;

    fn small(seed: u64) -> PipeGenerator {
        PipeGenerator::new(GeneratorConfig {
            dims: GridDims::new(6, 6, 6),
            seed,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn advance_places_pipe() {
        let mut g = small(1);
        let report = g.advance(1.0);
        assert!(report.ticks == 30 || g.is_done());
        assert_eq!(g.metrics().ticks, u64::from(report.ticks));
        assert!(g.grid().occupied_count() > 0);
    }

    #[test]
    fn reset_restarts_from_seed() {
        let mut g = small(3);
        g.advance(2.0);
        let first: Vec<_> = g.grid().iter_occupied().collect();

        g.reset(99);
        assert_eq!(g.grid().occupied_count(), 0);
        assert_eq!(g.seed(), 99);
        assert_eq!(g.scheduler().accumulator(), 0.0);

        g.reset(3);
        g.advance(2.0);
        let again: Vec<_> = g.grid().iter_occupied().collect();
        assert_eq!(first, again);
    }

    #[test]
    fn queries_agree_with_grid() {
        let mut g = small(5);
        g.advance(1.0);
        for (at, cell) in g.grid().iter() {
            assert_eq!(g.get_cell(at), cell);
            assert_eq!(g.probe(at), Probe::InRange(cell));
        }
        assert_eq!(g.get_cell(Coords::new(-1, 0, 0)), Cell::OUT_OF_BOUNDS);
        assert_eq!(g.probe(Coords::new(6, 0, 0)), Probe::OutOfBounds);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = PipeGenerator::new(GeneratorConfig {
            dims: GridDims::new(0, 6, 6),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Grid(_)));
    }
}
