//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a color within a [`Palette`](crate::Palette).
///
/// `ColorId(n)` is the n-th palette entry. Ordinal order is progression
/// order: the growth engine starts on `ColorId(0)` and moves to the next
/// id each time a walk ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorId(pub u16);

impl ColorId {
    /// The first color of every palette.
    pub const FIRST: ColorId = ColorId(0);

    /// Position of this color in its palette.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for ColorId {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the growth engine executes one step, including
/// steps that only advance the color. Ticks after completion are not
/// counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
