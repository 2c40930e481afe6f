//! Pipe shapes and grid cells.

use crate::direction::Axis;
use crate::id::ColorId;
use std::fmt;

/// One of the four quarter-turn orientations of an elbow about its axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Base orientation.
    R0,
    /// Rotated a quarter turn.
    R90,
    /// Rotated a half turn.
    R180,
    /// Rotated three quarter turns.
    R270,
}

impl Orientation {
    /// All orientations in rotation order.
    pub const ALL: [Orientation; 4] = [
        Orientation::R0,
        Orientation::R90,
        Orientation::R180,
        Orientation::R270,
    ];

    /// Number of quarter turns (`0..4`).
    pub fn quarter_turns(self) -> u8 {
        match self {
            Orientation::R0 => 0,
            Orientation::R90 => 1,
            Orientation::R180 => 2,
            Orientation::R270 => 3,
        }
    }
}

/// The shape of the pipe segment occupying a cell.
///
/// Shapes are derived from a pair of travel directions by
/// [`classify`](crate::topology::classify); nothing else constructs
/// non-empty shapes during generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PipeShape {
    /// No pipe.
    #[default]
    Empty,
    /// A straight run along `axis`.
    Straight {
        /// The axis the pipe runs along.
        axis: Axis,
    },
    /// A 90 degree bend whose two arms are perpendicular to `axis`.
    Elbow {
        /// The axis the bend turns about.
        axis: Axis,
        /// Which of the four arm pairs the bend connects.
        orientation: Orientation,
    },
}

impl PipeShape {
    /// Every non-empty shape, in [`ordinal`](PipeShape::ordinal) order.
    pub const ALL_PIPES: [PipeShape; 15] = {
        use Axis::{X, Y, Z};
        use Orientation::{R0, R180, R270, R90};
        [
            PipeShape::Straight { axis: X },
            PipeShape::Straight { axis: Y },
            PipeShape::Straight { axis: Z },
            PipeShape::Elbow { axis: X, orientation: R0 },
            PipeShape::Elbow { axis: X, orientation: R90 },
            PipeShape::Elbow { axis: X, orientation: R180 },
            PipeShape::Elbow { axis: X, orientation: R270 },
            PipeShape::Elbow { axis: Y, orientation: R0 },
            PipeShape::Elbow { axis: Y, orientation: R90 },
            PipeShape::Elbow { axis: Y, orientation: R180 },
            PipeShape::Elbow { axis: Y, orientation: R270 },
            PipeShape::Elbow { axis: Z, orientation: R0 },
            PipeShape::Elbow { axis: Z, orientation: R90 },
            PipeShape::Elbow { axis: Z, orientation: R180 },
            PipeShape::Elbow { axis: Z, orientation: R270 },
        ]
    };

    /// Stable numbering `0..=15`: `Empty` is 0, straights are 1..=3
    /// (X, Y, Z), elbows follow grouped by axis then orientation.
    ///
    /// Renderers index mesh/rotation tables by this value.
    pub fn ordinal(self) -> u8 {
        let axis_ix = |a: Axis| match a {
            Axis::X => 0u8,
            Axis::Y => 1,
            Axis::Z => 2,
        };
        match self {
            PipeShape::Empty => 0,
            PipeShape::Straight { axis } => 1 + axis_ix(axis),
            PipeShape::Elbow { axis, orientation } => {
                4 + axis_ix(axis) * 4 + orientation.quarter_turns()
            }
        }
    }

    /// Whether this is [`PipeShape::Empty`].
    pub fn is_empty(self) -> bool {
        matches!(self, PipeShape::Empty)
    }

    /// Whether this is a straight run.
    pub fn is_straight(self) -> bool {
        matches!(self, PipeShape::Straight { .. })
    }

    /// Whether this is an elbow.
    pub fn is_elbow(self) -> bool {
        matches!(self, PipeShape::Elbow { .. })
    }

    /// The axis of a straight or elbow, `None` for `Empty`.
    pub fn axis(self) -> Option<Axis> {
        match self {
            PipeShape::Empty => None,
            PipeShape::Straight { axis } | PipeShape::Elbow { axis, .. } => Some(axis),
        }
    }
}

impl fmt::Display for PipeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipeShape::Empty => f.write_str("empty"),
            PipeShape::Straight { axis } => write!(f, "straight-{axis}"),
            PipeShape::Elbow { axis, orientation } => {
                write!(f, "elbow-{axis}-{}", orientation.quarter_turns() as u32 * 90)
            }
        }
    }
}

/// One voxel of the grid: a pipe shape and the color it was laid in.
///
/// The color of an `Empty` cell carries no meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Shape of the segment in this cell.
    pub shape: PipeShape,
    /// Palette color of the segment.
    pub color: ColorId,
}

impl Cell {
    /// An unwritten cell.
    pub const EMPTY: Cell = Cell {
        shape: PipeShape::Empty,
        color: ColorId(0),
    };

    /// What the grid reports for coordinates outside its bounds.
    ///
    /// Any non-empty shape would do; a straight X segment makes an
    /// out-of-range probe read as occupied, which keeps walkers inside.
    pub const OUT_OF_BOUNDS: Cell = Cell {
        shape: PipeShape::Straight { axis: Axis::X },
        color: ColorId(0),
    };

    /// A pipe cell.
    pub fn pipe(shape: PipeShape, color: ColorId) -> Self {
        Self { shape, color }
    }

    /// Whether no pipe occupies this cell.
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ordinals_are_dense_and_unique() {
        assert_eq!(PipeShape::Empty.ordinal(), 0);
        let ords: Vec<u8> = PipeShape::ALL_PIPES.iter().map(|s| s.ordinal()).collect();
        assert_eq!(ords, (1..=15).collect::<Vec<u8>>());
    }

    #[test]
    fn all_pipes_are_distinct_and_non_empty() {
        let set: HashSet<PipeShape> = PipeShape::ALL_PIPES.into_iter().collect();
        assert_eq!(set.len(), 15);
        assert!(!set.contains(&PipeShape::Empty));
        assert_eq!(PipeShape::ALL_PIPES.iter().filter(|s| s.is_straight()).count(), 3);
        assert_eq!(PipeShape::ALL_PIPES.iter().filter(|s| s.is_elbow()).count(), 12);
    }

    #[test]
    fn sentinel_reads_as_occupied() {
        assert!(Cell::EMPTY.is_empty());
        assert!(!Cell::OUT_OF_BOUNDS.is_empty());
        assert_eq!(Cell::default(), Cell::EMPTY);
    }

    #[test]
    fn display_names() {
        assert_eq!(PipeShape::Straight { axis: Axis::Y }.to_string(), "straight-Y");
        assert_eq!(
            PipeShape::Elbow {
                axis: Axis::Z,
                orientation: Orientation::R270
            }
            .to_string(),
            "elbow-Z-270"
        );
    }
}
