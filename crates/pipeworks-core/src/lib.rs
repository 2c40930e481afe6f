//! Core types and traits for the Pipeworks pipe generator.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! vocabulary shared by the grid store and the growth engine: voxel
//! coordinates, the six travel directions, pipe shapes and cells, color
//! palettes, the injectable random source, and the topology classifier
//! that turns a pair of travel directions into a concrete pipe shape.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coords;
pub mod direction;
pub mod error;
pub mod id;
pub mod palette;
pub mod rng;
pub mod shape;
pub mod topology;

pub use coords::{Coords, GridDims};
pub use direction::{Axis, Direction};
pub use error::PaletteError;
pub use id::{ColorId, TickId};
pub use palette::{Palette, Rgb};
pub use rng::StepRng;
pub use shape::{Cell, Orientation, PipeShape};
pub use topology::{classify, is_opposite, try_classify};
