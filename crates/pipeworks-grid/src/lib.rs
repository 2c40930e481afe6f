//! Voxel grid storage for the Pipeworks generator.
//!
//! [`VoxelGrid`] is a fixed-size 3D array of [`Cell`](pipeworks_core::Cell)s
//! written by the growth engine and read by renderers. Out-of-range reads
//! never fail: [`VoxelGrid::get`] degrades to a sentinel that reads as
//! occupied, and [`VoxelGrid::probe`] reports the bounds explicitly.
//!
//! [`hash::grid_fingerprint`] condenses a grid into a `u64` for cheap
//! equality checks between runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod hash;

pub use error::GridError;
pub use grid::{Probe, VoxelGrid};
pub use hash::grid_fingerprint;
