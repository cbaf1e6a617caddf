//! Orientation of closed position sequences.
//!
//! The orientation is determined by the sign of the edge sum `Σ (x2 - x1) * (y2 + y1)` over all segments of the
//! sequence, including the segment from the last position back to the first one. The sequence does not need to be
//! closed explicitly: a repeated closing position adds a zero-length segment, which does not change the sum.
//!
//! Only longitude (x) and latitude (y) take part in the computation, altitude is ignored.

use serde::{Deserialize, Serialize};

use crate::position::GeoPosition;

/// Direction in which a closed sequence of positions is traversed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    #[default]
    CounterClockwise,
}

impl Winding {
    /// Returns the other winding.
    pub fn opposite(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// Sum of `(x2 - x1) * (y2 + y1)` over all the segments of the sequence, treating it as cyclic.
///
/// The value is positive for clockwise sequences and negative for counterclockwise ones. Its absolute value is
/// twice the area enclosed by the sequence.
pub fn edge_sum<P: GeoPosition>(positions: &[P]) -> f64 {
    let next = positions.iter().cycle().skip(1);
    positions.iter().zip(next).fold(0.0, |sum, (p1, p2)| {
        sum + (p2.lon() - p1.lon()) * (p2.lat() + p1.lat())
    })
}

/// Winding of the sequence.
///
/// A negative edge sum is the only counterclockwise case. Degenerate sequences (zero area, fewer than three
/// distinct positions) have a zero sum and are reported as [`Winding::Clockwise`], but callers should not depend
/// on the result for such input.
pub fn winding<P: GeoPosition>(positions: &[P]) -> Winding {
    if edge_sum(positions) < 0.0 {
        Winding::CounterClockwise
    } else {
        Winding::Clockwise
    }
}

/// Returns true if the sequence is traversed counterclockwise. See [`winding`].
pub fn is_counter_clockwise<P: GeoPosition>(positions: &[P]) -> bool {
    winding(positions) == Winding::CounterClockwise
}
