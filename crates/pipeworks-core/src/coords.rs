//! Voxel coordinates and grid extents.

use crate::direction::Direction;
use std::fmt;

/// An integer voxel coordinate.
///
/// Coordinates are plain values and may lie outside any particular grid:
/// [`step`](Coords::step) from an edge cell happily produces `-1` or
/// `width`. Bounds are the grid's concern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coords {
    /// Position along the X axis.
    pub x: i32,
    /// Position along the Y axis.
    pub y: i32,
    /// Position along the Z axis.
    pub z: i32,
}

impl Coords {
    /// Create a coordinate from its three components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The neighbouring coordinate one unit along `dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipeworks_core::{Coords, Direction};
    ///
    /// let c = Coords::new(2, 0, 5);
    /// assert_eq!(c.step(Direction::XPlus), Coords::new(3, 0, 5));
    /// assert_eq!(c.step(Direction::YMinus), Coords::new(2, -1, 5));
    /// ```
    pub fn step(self, dir: Direction) -> Coords {
        let (dx, dy, dz) = dir.unit();
        Coords::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// This coordinate shifted so the grid's midpoint sits at the origin.
    ///
    /// Each axis is offset by half its extent (integer division), which is
    /// how a renderer lays the grid out around the camera target.
    pub fn centered(self, dims: GridDims) -> (i32, i32, i32) {
        (
            self.x - (dims.width / 2) as i32,
            self.y - (dims.height / 2) as i32,
            self.z - (dims.length / 2) as i32,
        )
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Extents of a voxel grid along X (width), Y (height) and Z (length).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    /// Number of cells along X.
    pub width: u32,
    /// Number of cells along Y.
    pub height: u32,
    /// Number of cells along Z.
    pub length: u32,
}

impl GridDims {
    /// Create grid extents.
    pub const fn new(width: u32, height: u32, length: u32) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// Total number of cells, or `None` if the product overflows `usize`.
    pub fn checked_cell_count(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.length as usize)
    }

    /// Total number of cells.
    ///
    /// Saturates at `usize::MAX`; grids validate their extents with
    /// [`checked_cell_count`](GridDims::checked_cell_count) at construction.
    pub fn cell_count(&self) -> usize {
        self.checked_cell_count().unwrap_or(usize::MAX)
    }

    /// Whether `c` lies within `[0,width) x [0,height) x [0,length)`.
    pub fn contains(&self, c: Coords) -> bool {
        c.x >= 0
            && c.y >= 0
            && c.z >= 0
            && (c.x as u32) < self.width
            && (c.y as u32) < self.height
            && (c.z as u32) < self.length
    }
}

impl Default for GridDims {
    /// The 25 x 25 x 40 volume of the classic screensaver.
    fn default() -> Self {
        Self::new(25, 25, 40)
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.length)
    }
}
