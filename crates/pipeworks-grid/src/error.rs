//! Error types for grid construction.

use std::fmt;

/// Errors arising from [`VoxelGrid`](crate::VoxelGrid) construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// At least one extent is zero.
    EmptyGrid,
    /// An extent does not fit the `i32` coordinate range.
    DimensionTooLarge {
        /// Which extent (`"width"`, `"height"` or `"length"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `width * height * length` overflows `usize`.
    CellCountOverflow,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow => write!(f, "grid cell count overflows usize"),
        }
    }
}

impl std::error::Error for GridError {}
