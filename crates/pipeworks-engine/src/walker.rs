//! The single walker that lays pipe.

use pipeworks_core::{ColorId, Coords, Direction};

/// Where the walker is in its life cycle between ticks.
///
/// Moving to the next color happens inside a tick, so it never shows up
/// here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Laying segments in the current color.
    Growing,
    /// The palette (or the grid) is used up; ticks do nothing.
    Exhausted,
}

/// Position, heading, and color of the walker.
///
/// Only the [`GrowthEngine`](crate::GrowthEngine) mutates this; everyone
/// else gets a shared reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkerState {
    pub(crate) position: Coords,
    pub(crate) heading: Direction,
    pub(crate) color: ColorId,
    pub(crate) segments_placed_in_color: u32,
    pub(crate) done: bool,
}

impl WalkerState {
    pub(crate) fn new(position: Coords, heading: Direction, color: ColorId) -> Self {
        Self {
            position,
            heading,
            color,
            segments_placed_in_color: 0,
            done: false,
        }
    }

    /// The cell the next segment will be written to.
    pub fn position(&self) -> Coords {
        self.position
    }

    /// Direction of travel into the current cell.
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Color of the current walk.
    pub fn color(&self) -> ColorId {
        self.color
    }

    /// Segments laid in the current color, including one that overran
    /// the cap.
    pub fn segments_placed_in_color(&self) -> u32 {
        self.segments_placed_in_color
    }

    /// Whether generation has finished.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Current life-cycle phase.
    pub fn phase(&self) -> Phase {
        if self.done {
            Phase::Exhausted
        } else {
            Phase::Growing
        }
    }
}
