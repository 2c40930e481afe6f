//! Direction-pair topology: opposite detection and pipe-shape classification.
//!
//! A segment is laid when the walker arrives in a cell travelling
//! `incoming` and leaves it travelling `outgoing`. Equal directions give a
//! straight pipe; perpendicular directions give an elbow that turns about
//! the third axis. The elbow orientation table below is combinatorial and
//! matches the mesh rotations the renderer expects, so it is spelled out
//! pair by pair rather than computed.
//!
//! Each elbow tag covers exactly two ordered pairs: `(a, b)` and its
//! mirror `(-b, -a)`, i.e. the same bend walked from the other end.

use crate::direction::{Axis, Direction};
use crate::shape::{Orientation, PipeShape};

/// Whether `d0` and `d1` point in opposite directions along one axis.
///
/// Symmetric; exactly six of the 36 ordered pairs are opposite.
pub fn is_opposite(d0: Direction, d1: Direction) -> bool {
    d0.opposite() == d1
}

/// Classify the segment entered along `incoming` and left along `outgoing`.
///
/// # Panics
///
/// Panics if the directions are opposite. A walker never reverses onto
/// the cell it came from, so an opposite pair means the caller broke that
/// invariant. Use [`try_classify`] where the precondition is not
/// guaranteed.
///
/// # Examples
///
/// ```
/// use pipeworks_core::{classify, Axis, Direction, Orientation, PipeShape};
///
/// assert_eq!(
///     classify(Direction::XPlus, Direction::XPlus),
///     PipeShape::Straight { axis: Axis::X }
/// );
/// assert_eq!(
///     classify(Direction::ZPlus, Direction::YMinus),
///     PipeShape::Elbow { axis: Axis::X, orientation: Orientation::R0 }
/// );
/// ```
pub fn classify(incoming: Direction, outgoing: Direction) -> PipeShape {
    match try_classify(incoming, outgoing) {
        Some(shape) => shape,
        None => panic!(
            "cannot classify a reversal: incoming {incoming} and outgoing {outgoing} are opposite"
        ),
    }
}

/// Classify a direction pair, returning `None` for opposite pairs.
pub fn try_classify(incoming: Direction, outgoing: Direction) -> Option<PipeShape> {
    use crate::direction::Direction::{XMinus, XPlus, YMinus, YPlus, ZMinus, ZPlus};
    use Orientation::{R0, R180, R270, R90};

    if incoming == outgoing {
        return Some(PipeShape::Straight {
            axis: incoming.axis(),
        });
    }

    let (axis, orientation) = match (incoming, outgoing) {
        // Bends in the Y/Z plane.
        (ZPlus, YMinus) | (YPlus, ZMinus) => (Axis::X, R0),
        (ZPlus, YPlus) | (YMinus, ZMinus) => (Axis::X, R90),
        (YMinus, ZPlus) | (ZMinus, YPlus) => (Axis::X, R180),
        (YPlus, ZPlus) | (ZMinus, YMinus) => (Axis::X, R270),

        // Bends in the X/Z plane.
        (XPlus, ZMinus) | (ZPlus, XMinus) => (Axis::Y, R0),
        (XPlus, ZPlus) | (ZMinus, XMinus) => (Axis::Y, R90),
        (ZMinus, XPlus) | (XMinus, ZPlus) => (Axis::Y, R180),
        (ZPlus, XPlus) | (XMinus, ZMinus) => (Axis::Y, R270),

        // Bends in the X/Y plane.
        (YPlus, XMinus) | (XPlus, YMinus) => (Axis::Z, R0),
        (YPlus, XPlus) | (XMinus, YMinus) => (Axis::Z, R90),
        (XMinus, YPlus) | (YMinus, XPlus) => (Axis::Z, R180),
        (XPlus, YPlus) | (YMinus, XMinus) => (Axis::Z, R270),

        // Everything left is a reversal.
        _ => {
            debug_assert!(is_opposite(incoming, outgoing));
            return None;
        }
    };

    Some(PipeShape::Elbow { axis, orientation })
}
