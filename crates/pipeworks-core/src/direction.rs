//! The six axis-aligned travel directions.

use std::fmt;

/// A coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// The X axis (width).
    X,
    /// The Y axis (height).
    Y,
    /// The Z axis (length).
    Z,
}

impl Axis {
    /// All three axes in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The axis that is neither `self` nor `other`.
    ///
    /// Returns `None` when both arguments name the same axis.
    pub fn remaining(self, other: Axis) -> Option<Axis> {
        match (self, other) {
            (Axis::X, Axis::Y) | (Axis::Y, Axis::X) => Some(Axis::Z),
            (Axis::X, Axis::Z) | (Axis::Z, Axis::X) => Some(Axis::Y),
            (Axis::Y, Axis::Z) | (Axis::Z, Axis::Y) => Some(Axis::X),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(s)
    }
}

/// One of the six signed axis directions.
///
/// The discriminants fix the ordinal order used by weighted sampling:
/// `X-, X+, Y-, Y+, Z-, Z+`. Changing it changes which direction a given
/// random draw selects, so it is part of the reproducibility contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Towards decreasing X.
    XMinus = 0,
    /// Towards increasing X.
    XPlus = 1,
    /// Towards decreasing Y.
    YMinus = 2,
    /// Towards increasing Y.
    YPlus = 3,
    /// Towards decreasing Z.
    ZMinus = 4,
    /// Towards increasing Z.
    ZPlus = 5,
}

impl Direction {
    /// All six directions in ordinal order.
    pub const ALL: [Direction; 6] = [
        Direction::XMinus,
        Direction::XPlus,
        Direction::YMinus,
        Direction::YPlus,
        Direction::ZMinus,
        Direction::ZPlus,
    ];

    /// Ordinal of this direction (`0..6`).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction with the given ordinal, or `None` if `i >= 6`.
    pub fn from_index(i: usize) -> Option<Direction> {
        Self::ALL.get(i).copied()
    }

    /// The axis this direction travels along.
    pub fn axis(self) -> Axis {
        match self {
            Direction::XMinus | Direction::XPlus => Axis::X,
            Direction::YMinus | Direction::YPlus => Axis::Y,
            Direction::ZMinus | Direction::ZPlus => Axis::Z,
        }
    }

    /// The direction pointing the other way along the same axis.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::XMinus => Direction::XPlus,
            Direction::XPlus => Direction::XMinus,
            Direction::YMinus => Direction::YPlus,
            Direction::YPlus => Direction::YMinus,
            Direction::ZMinus => Direction::ZPlus,
            Direction::ZPlus => Direction::ZMinus,
        }
    }

    /// Unit offset `(dx, dy, dz)`.
    pub fn unit(self) -> (i32, i32, i32) {
        match self {
            Direction::XMinus => (-1, 0, 0),
            Direction::XPlus => (1, 0, 0),
            Direction::YMinus => (0, -1, 0),
            Direction::YPlus => (0, 1, 0),
            Direction::ZMinus => (0, 0, -1),
            Direction::ZPlus => (0, 0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self {
            Direction::XMinus | Direction::YMinus | Direction::ZMinus => '-',
            Direction::XPlus | Direction::YPlus | Direction::ZPlus => '+',
        };
        write!(f, "{}{}", self.axis(), sign)
    }
}
