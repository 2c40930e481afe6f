//! Generator configuration, validation, and error types.
//!
//! [`GeneratorConfig`] is the input for building a
//! [`PipeGenerator`](crate::PipeGenerator) or a bare
//! [`GrowthEngine`](crate::GrowthEngine).
//! [`validate()`](GeneratorConfig::validate) checks every parameter up
//! front so the tick path never has to.

use std::error::Error;
use std::fmt;

use pipeworks_core::{Coords, GridDims, Palette, PaletteError};
use pipeworks_grid::{GridError, VoxelGrid};

/// Default weight of continuing straight ahead.
pub const DEFAULT_STRAIGHT_BIAS: u32 = 20;

/// Default per-color segment cap.
pub const DEFAULT_SEGMENT_CAP: u32 = 500;

/// Largest accepted straight bias. Keeps the weight total far from
/// `u32::MAX`.
pub const MAX_STRAIGHT_BIAS: u32 = 1 << 24;

// ── SchedulerConfig ────────────────────────────────────────────────

/// Pacing of the [`FixedStepScheduler`](crate::FixedStepScheduler).
#[derive(Clone, Debug, PartialEq)]
pub struct SchedulerConfig {
    /// Simulation ticks per second of elapsed time. Default: 30.
    pub tick_rate_hz: f64,
    /// Upper bound on ticks run by one `advance` call. `None` (default)
    /// catches up on the whole backlog at once; with a cap the leftover
    /// backlog is carried to later calls.
    pub max_ticks_per_advance: Option<u32>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 30.0,
            max_ticks_per_advance: None,
        }
    }
}

impl SchedulerConfig {
    /// Check the tick rate and cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The period must be finite too: subnormal rates give 1/hz = inf.
        let hz = self.tick_rate_hz;
        if !hz.is_finite() || hz <= 0.0 || !(1.0 / hz).is_finite() {
            return Err(ConfigError::InvalidTickRate { value: hz });
        }
        if self.max_ticks_per_advance == Some(0) {
            return Err(ConfigError::ZeroTickCap);
        }
        Ok(())
    }

    /// Seconds per tick.
    pub fn tick_period(&self) -> f64 {
        1.0 / self.tick_rate_hz
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`GeneratorConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid extents are unusable.
    Grid(GridError),
    /// Palette construction failed.
    Palette(PaletteError),
    /// `max_segments_per_color` is zero.
    ZeroSegmentCap,
    /// `straight_bias` is zero.
    ZeroStraightBias,
    /// `straight_bias` exceeds [`MAX_STRAIGHT_BIAS`].
    StraightBiasTooLarge {
        /// The configured bias.
        value: u32,
    },
    /// `tick_rate_hz` is NaN, infinite, zero, negative, or subnormal.
    InvalidTickRate {
        /// The invalid value.
        value: f64,
    },
    /// `max_ticks_per_advance` is `Some(0)`.
    ZeroTickCap,
    /// An explicit start position lies outside the grid.
    StartOutOfBounds {
        /// The requested start.
        at: Coords,
        /// The grid extents.
        dims: GridDims,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Palette(e) => write!(f, "palette: {e}"),
            Self::ZeroSegmentCap => write!(f, "max_segments_per_color must be at least 1"),
            Self::ZeroStraightBias => write!(f, "straight_bias must be at least 1"),
            Self::StraightBiasTooLarge { value } => {
                write!(f, "straight_bias {value} exceeds maximum {MAX_STRAIGHT_BIAS}")
            }
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and positive, got {value}")
            }
            Self::ZeroTickCap => write!(f, "max_ticks_per_advance must be at least 1"),
            Self::StartOutOfBounds { at, dims } => {
                write!(f, "start position {at} is outside the {dims} grid")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Palette(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<PaletteError> for ConfigError {
    fn from(e: PaletteError) -> Self {
        Self::Palette(e)
    }
}

// ── GeneratorConfig ────────────────────────────────────────────────

/// Complete configuration for a pipe generator.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Grid extents. Default: 25 x 25 x 40.
    pub dims: GridDims,
    /// Segments a color may lay before the walk moves on. The segment
    /// that exceeds the cap is still written, so a color can hold up to
    /// `max_segments_per_color + 1` cells. Default: 500.
    pub max_segments_per_color: u32,
    /// Colors in progression order.
    pub palette: Palette,
    /// RNG seed. Default: 0.
    pub seed: u64,
    /// Weight of keeping the current heading; every other open direction
    /// weighs 1. Default: 20.
    pub straight_bias: u32,
    /// Scheduler pacing.
    pub scheduler: SchedulerConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dims: GridDims::default(),
            max_segments_per_color: DEFAULT_SEGMENT_CAP,
            palette: Palette::default(),
            seed: 0,
            straight_bias: DEFAULT_STRAIGHT_BIAS,
            scheduler: SchedulerConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Validate all parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid extents.
        VoxelGrid::check_dims(self.dims)?;
        // 2. Segment cap.
        if self.max_segments_per_color == 0 {
            return Err(ConfigError::ZeroSegmentCap);
        }
        // 3. Straight bias.
        if self.straight_bias == 0 {
            return Err(ConfigError::ZeroStraightBias);
        }
        if self.straight_bias > MAX_STRAIGHT_BIAS {
            return Err(ConfigError::StraightBiasTooLarge {
                value: self.straight_bias,
            });
        }
        // 4. Pacing.
        self.scheduler.validate()
    }
}
