//! The growth engine: a weighted random walk that lays pipe.
//!
//! Each [`tick`](GrowthEngine::tick) either writes one segment, ends the
//! current walk and starts the next color somewhere else, or finishes the
//! run. Ending a walk happens for one of two reasons: the walker has no
//! open neighbour ([`AdvanceReason::Stuck`]) or the color has used up its
//! segment budget ([`AdvanceReason::CapReached`]).
//!
//! # Direction choice
//!
//! Every direction weighs 1 except the current heading, which weighs the
//! configured straight bias. Directions leading into an occupied cell, off
//! the grid, or straight back are zeroed. One uniform draw in
//! `[0, total)` then picks a direction by cumulative scan in
//! [`Direction`] ordinal order, see [`pick_weighted`].

use log::{debug, info, warn};
use pipeworks_core::{
    classify, is_opposite, Cell, ColorId, Coords, Direction, Palette, PipeShape, StepRng, TickId,
};
use pipeworks_grid::VoxelGrid;

use crate::config::{ConfigError, GeneratorConfig};
use crate::metrics::GenerationMetrics;
use crate::rng::SeededRng;
use crate::scheduler::Simulation;
use crate::walker::WalkerState;

/// Random coordinate draws tried when looking for a new start cell before
/// falling back to a linear scan.
pub const RESEED_ATTEMPTS: u32 = 256;

// ── Outcomes ───────────────────────────────────────────────────────

/// Why a walk ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdvanceReason {
    /// No direction was open.
    Stuck,
    /// The segment just laid took the color past its cap.
    CapReached,
}

/// One segment written to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Cell written.
    pub at: Coords,
    /// Shape written.
    pub shape: PipeShape,
    /// Color written.
    pub color: ColorId,
    /// Heading the walker arrived with.
    pub incoming: Direction,
    /// Direction the walker chose to leave by.
    pub outgoing: Direction,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A segment was laid and the walker moved on.
    Grew(Placement),
    /// The walk ended and the next color starts at a fresh cell.
    ColorAdvanced {
        /// Why the walk ended.
        reason: AdvanceReason,
        /// The capping segment, if the walk ended by cap.
        placement: Option<Placement>,
        /// The color now in use.
        next: ColorId,
    },
    /// The walk ended and no further color (or no free cell) is left.
    Finished {
        /// Why the last walk ended.
        reason: AdvanceReason,
        /// The capping segment, if the walk ended by cap.
        placement: Option<Placement>,
    },
    /// Generation had already finished; nothing happened.
    Idle,
}

impl TickOutcome {
    /// The segment written this tick, if any.
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            TickOutcome::Grew(p) => Some(p),
            TickOutcome::ColorAdvanced { placement, .. }
            | TickOutcome::Finished { placement, .. } => placement.as_ref(),
            TickOutcome::Idle => None,
        }
    }
}

// ── Direction weighting ────────────────────────────────────────────

/// Weights of the six directions from `position` travelling `heading`,
/// indexed by [`Direction::index`].
pub fn direction_weights(
    grid: &VoxelGrid,
    position: Coords,
    heading: Direction,
    straight_bias: u32,
) -> [u32; 6] {
    let mut weights = [1u32; 6];
    weights[heading.index()] = straight_bias;
    for dir in Direction::ALL {
        // `get` reports off-grid cells as occupied.
        if !grid.get(position.step(dir)).is_empty() || is_opposite(dir, heading) {
            weights[dir.index()] = 0;
        }
    }
    weights
}

/// Select the direction whose cumulative-weight interval contains `r`.
///
/// Scans in ordinal order: `r = 0` picks the lowest-ordinal direction with
/// nonzero weight and `r = total - 1` the highest. Returns `None` when
/// `r` is not below the weight total.
///
/// # Examples
///
/// ```
/// use pipeworks_core::Direction;
/// use pipeworks_engine::growth::pick_weighted;
///
/// let w = [0, 20, 1, 1, 0, 1];
/// assert_eq!(pick_weighted(&w, 0), Some(Direction::XPlus));
/// assert_eq!(pick_weighted(&w, 19), Some(Direction::XPlus));
/// assert_eq!(pick_weighted(&w, 20), Some(Direction::YMinus));
/// assert_eq!(pick_weighted(&w, 22), Some(Direction::ZPlus));
/// assert_eq!(pick_weighted(&w, 23), None);
/// ```
pub fn pick_weighted(weights: &[u32; 6], r: u32) -> Option<Direction> {
    let mut remaining = r;
    for dir in Direction::ALL {
        let w = weights[dir.index()];
        if remaining < w {
            return Some(dir);
        }
        remaining -= w;
    }
    None
}

// ── GrowthEngine ───────────────────────────────────────────────────

/// Owns the grid and the walker, and advances generation one tick at a
/// time.
///
/// Randomness comes from the injected `R`; the default is the seeded
/// ChaCha generator used in production.
#[derive(Debug)]
pub struct GrowthEngine<R: StepRng = SeededRng> {
    grid: VoxelGrid,
    walker: WalkerState,
    palette: Palette,
    max_segments: u32,
    straight_bias: u32,
    rng: R,
    tick: TickId,
    metrics: GenerationMetrics,
}

impl<R: StepRng> GrowthEngine<R> {
    /// Validate `config`, allocate the grid, and place the walker at a
    /// random cell with a random heading on the first palette color.
    ///
    /// The start is drawn x, then y, then z, then the heading.
    /// `config.seed` is not consulted; the caller seeds `rng`.
    pub fn new(config: &GeneratorConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = VoxelGrid::new(config.dims)?;
        let position = random_coords(&grid, &mut rng);
        let heading = random_direction(&mut rng);
        Ok(Self::assemble(config, rng, grid, position, heading))
    }

    /// Like [`new`](GrowthEngine::new) but with an explicit start.
    ///
    /// Returns [`ConfigError::StartOutOfBounds`] if `position` is outside
    /// the grid.
    pub fn with_start(
        config: &GeneratorConfig,
        rng: R,
        position: Coords,
        heading: Direction,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = VoxelGrid::new(config.dims)?;
        if !grid.contains(position) {
            return Err(ConfigError::StartOutOfBounds {
                at: position,
                dims: config.dims,
            });
        }
        Ok(Self::assemble(config, rng, grid, position, heading))
    }

    fn assemble(
        config: &GeneratorConfig,
        rng: R,
        grid: VoxelGrid,
        position: Coords,
        heading: Direction,
    ) -> Self {
        let palette = config.palette.clone();
        let walker = WalkerState::new(position, heading, palette.first());
        Self {
            grid,
            walker,
            palette,
            max_segments: config.max_segments_per_color,
            straight_bias: config.straight_bias,
            rng,
            tick: TickId::default(),
            metrics: GenerationMetrics::default(),
        }
    }

    /// Start over: clear the grid and metrics, swap in `rng`, and place a
    /// fresh walker exactly as [`new`](GrowthEngine::new) does.
    pub fn reset_with(&mut self, rng: R) {
        self.rng = rng;
        self.grid.clear();
        self.metrics = GenerationMetrics::default();
        self.tick = TickId::default();
        let position = random_coords(&self.grid, &mut self.rng);
        let heading = random_direction(&mut self.rng);
        self.walker = WalkerState::new(position, heading, self.palette.first());
    }

    /// Execute one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.walker.done {
            return TickOutcome::Idle;
        }
        self.tick = TickId(self.tick.0 + 1);
        self.metrics.ticks += 1;

        let w = &self.walker;
        let weights = direction_weights(&self.grid, w.position, w.heading, self.straight_bias);
        let total: u32 = weights.iter().sum();
        if total == 0 {
            self.metrics.stuck_events += 1;
            return self.end_walk(AdvanceReason::Stuck, None);
        }

        let r = self.rng.below(total);
        let chosen = pick_weighted(&weights, r).expect("draw is below the weight total");

        let w = &mut self.walker;
        let shape = classify(w.heading, chosen);
        let placement = Placement {
            at: w.position,
            shape,
            color: w.color,
            incoming: w.heading,
            outgoing: chosen,
        };
        self.grid.set(w.position, Cell::pipe(shape, w.color));
        w.segments_placed_in_color += 1;
        self.metrics.segments_placed += 1;

        if w.segments_placed_in_color > self.max_segments {
            self.metrics.capped_events += 1;
            return self.end_walk(AdvanceReason::CapReached, Some(placement));
        }

        w.heading = chosen;
        w.position = w.position.step(chosen);
        TickOutcome::Grew(placement)
    }

    /// Move to the next color and a fresh start cell, or finish.
    fn end_walk(&mut self, reason: AdvanceReason, placement: Option<Placement>) -> TickOutcome {
        let Some(next) = self.palette.successor(self.walker.color) else {
            self.walker.done = true;
            info!(
                "palette exhausted at tick {}: {} segments in {} cells",
                self.tick,
                self.metrics.segments_placed,
                self.grid.cell_count()
            );
            return TickOutcome::Finished { reason, placement };
        };

        let Some(start) = self.find_start() else {
            self.walker.done = true;
            warn!(
                "grid {} has no empty cell left for color {next}; finishing early",
                self.grid.dims()
            );
            return TickOutcome::Finished { reason, placement };
        };
        let heading = random_direction(&mut self.rng);

        debug!(
            "color {} ended ({reason:?}) after {} segments; color {next} starts at {start} heading {heading}",
            self.walker.color, self.walker.segments_placed_in_color
        );
        self.metrics.color_advances += 1;
        self.walker.color = next;
        self.walker.segments_placed_in_color = 0;
        self.walker.position = start;
        self.walker.heading = heading;
        TickOutcome::ColorAdvanced {
            reason,
            placement,
            next,
        }
    }

    /// A uniformly random empty cell by rejection sampling, bounded by
    /// [`RESEED_ATTEMPTS`] and followed by a scan from a random offset.
    fn find_start(&mut self) -> Option<Coords> {
        if self.grid.is_full() {
            return None;
        }
        for _ in 0..RESEED_ATTEMPTS {
            self.metrics.reseed_draws += 1;
            let c = random_coords(&self.grid, &mut self.rng);
            if self.grid.get(c).is_empty() {
                return Some(c);
            }
        }

        self.metrics.fallback_scans += 1;
        warn!(
            "no empty cell in {RESEED_ATTEMPTS} random draws ({} of {} occupied); scanning",
            self.grid.occupied_count(),
            self.grid.cell_count()
        );
        let n = self.grid.cell_count();
        let offset = self.rng.below(n.min(u32::MAX as usize) as u32) as usize;
        (0..n)
            .map(|k| (offset + k) % n)
            .find(|&i| self.grid.cell_at(i).is_some_and(|c| c.is_empty()))
            .and_then(|i| self.grid.coords_of(i))
    }

    // ── Accessors ──────────────────────────────────────────────

    /// The grid.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// The walker.
    pub fn walker(&self) -> &WalkerState {
        &self.walker
    }

    /// The palette in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Cumulative counters.
    pub fn metrics(&self) -> &GenerationMetrics {
        &self.metrics
    }

    /// The most recently executed tick (`TickId(0)` before the first).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Whether generation has finished.
    pub fn is_done(&self) -> bool {
        self.walker.done
    }

    /// The random source.
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl<R: StepRng> Simulation for GrowthEngine<R> {
    type Outcome = TickOutcome;

    fn is_done(&self) -> bool {
        self.walker.done
    }

    fn tick(&mut self) -> TickOutcome {
        GrowthEngine::tick(self)
    }
}

fn random_coords<R: StepRng>(grid: &VoxelGrid, rng: &mut R) -> Coords {
    let dims = grid.dims();
    // Extents are at most i32::MAX, so each draw fits.
    let x = rng.below(dims.width) as i32;
    let y = rng.below(dims.height) as i32;
    let z = rng.below(dims.length) as i32;
    Coords::new(x, y, z)
}

fn random_direction<R: StepRng>(rng: &mut R) -> Direction {
    Direction::ALL[rng.below(Direction::ALL.len() as u32) as usize]
}
