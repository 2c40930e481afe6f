//! Pipeworks: a procedural 3D pipe generator.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Pipeworks sub-crates. For most users, adding `pipeworks` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use pipeworks::prelude::*;
//!
//! let config = GeneratorConfig {
//!     dims: GridDims::new(12, 12, 12),
//!     seed: 42,
//!     ..Default::default()
//! };
//! let mut generator = PipeGenerator::new(config).unwrap();
//!
//! // Feed it frame time; at the default 30 Hz one second is 30 ticks.
//! let report = generator.advance(1.0);
//! assert!(report.ticks <= 30);
//!
//! // Read the grid back for drawing.
//! for (at, cell) in generator.grid().iter_occupied() {
//!     let (x, y, z) = at.centered(generator.grid().dims());
//!     let rgb = generator.palette().rgb(cell.color).unwrap();
//!     let _ = (x, y, z, cell.shape.ordinal(), rgb);
//! }
//! assert_eq!(generator.get_cell(Coords::new(-1, 0, 0)), Cell::OUT_OF_BOUNDS);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pipeworks-core` | Coordinates, directions, shapes, palettes, topology |
//! | [`grid`] | `pipeworks-grid` | Voxel grid store and fingerprinting |
//! | [`engine`] | `pipeworks-engine` | Growth engine, scheduler, generator facade |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and the topology classifier (`pipeworks-core`).
///
/// Contains [`types::Coords`], [`types::Direction`], [`types::PipeShape`],
/// [`types::Palette`], the [`types::StepRng`] seam, and
/// [`types::classify`].
pub use pipeworks_core as types;

/// Voxel grid storage (`pipeworks-grid`).
///
/// [`grid::VoxelGrid`] plus [`grid::grid_fingerprint`] for comparing runs.
pub use pipeworks_grid as grid;

/// Generation and pacing (`pipeworks-engine`).
///
/// [`engine::GrowthEngine`] for tick-by-tick control,
/// [`engine::PipeGenerator`] for frame-time driven use.
pub use pipeworks_engine as engine;

/// Common imports for typical Pipeworks usage.
///
/// ```rust
/// use pipeworks::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use pipeworks_core::{
        classify, Axis, Cell, ColorId, Coords, Direction, GridDims, Orientation, Palette,
        PipeShape, Rgb, StepRng,
    };

    // Grid
    pub use pipeworks_grid::{grid_fingerprint, Probe, VoxelGrid};

    // Errors
    pub use pipeworks_core::PaletteError;
    pub use pipeworks_engine::ConfigError;
    pub use pipeworks_grid::GridError;

    // Engine
    pub use pipeworks_engine::{
        AdvanceReason, AdvanceReport, GenerationMetrics, GeneratorConfig, GrowthEngine,
        PipeGenerator, Placement, SchedulerConfig, SeededRng, TickOutcome,
    };
}
