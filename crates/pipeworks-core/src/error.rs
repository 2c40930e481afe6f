//! Error types for core value construction.

use std::error::Error;
use std::fmt;

/// Errors from [`Palette`](crate::Palette) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteError {
    /// A palette needs at least one color.
    Empty,
    /// Two entries share a name.
    DuplicateName {
        /// The repeated name.
        name: String,
    },
    /// More entries than [`ColorId`](crate::ColorId) can address.
    TooManyColors {
        /// Number of entries supplied.
        count: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "palette must contain at least one color"),
            Self::DuplicateName { name } => write!(f, "duplicate palette color '{name}'"),
            Self::TooManyColors { count } => {
                write!(f, "palette has {count} colors, at most {} supported", u16::MAX)
            }
        }
    }
}

impl Error for PaletteError {}
