//! Growth engine and scheduling for the Pipeworks generator.
//!
//! The [`GrowthEngine`] runs a single walker through a voxel grid, laying a
//! pipe segment per tick and moving through the palette one color per walk.
//! The [`FixedStepScheduler`] converts frame time into ticks at a fixed
//! rate, and [`PipeGenerator`] combines the two behind a frame-loop
//! friendly interface.
//!
//! All randomness flows through an injected
//! [`StepRng`](pipeworks_core::StepRng); [`SeededRng`] is the production
//! choice. The crate logs through the `log` facade and installs no logger.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod generator;
pub mod growth;
pub mod metrics;
pub mod rng;
pub mod scheduler;
pub mod walker;

pub use config::{ConfigError, GeneratorConfig, SchedulerConfig};
pub use generator::PipeGenerator;
pub use growth::{AdvanceReason, GrowthEngine, Placement, TickOutcome, RESEED_ATTEMPTS};
pub use metrics::GenerationMetrics;
pub use rng::SeededRng;
pub use scheduler::{AdvanceReport, FixedStepScheduler, Simulation};
pub use walker::{Phase, WalkerState};
