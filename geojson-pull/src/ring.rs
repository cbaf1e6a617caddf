use serde_json::Value;

use crate::encoder::Encoder;
use crate::error::{GeoJsonError, Result};
use crate::position::{pull_positions, GeoPosition};
use crate::winding::{winding, Winding};

/// Minimum number of points in a linear ring, not counting the closing point.
pub const MIN_RING_POINTS: usize = 3;

impl Encoder {
    /// Returns the coordinates of a linear ring with the given winding.
    ///
    /// The `count` positions returned by `accessor` are reversed if their winding differs from `required`, and then
    /// the first position is repeated at the end to close the ring. The result has `count + 1` positions.
    ///
    /// Fails without calling `accessor` if `count` is less than [`MIN_RING_POINTS`].
    pub fn linear_ring_coordinates<P, F>(
        &self,
        count: usize,
        required: Winding,
        accessor: F,
    ) -> Result<Vec<Value>>
    where
        P: GeoPosition,
        F: FnMut(usize) -> P,
    {
        if count < MIN_RING_POINTS {
            return Err(GeoJsonError::TooFewPoints {
                shape: "linear ring",
                required: MIN_RING_POINTS,
                actual: count,
            });
        }

        let mut positions = pull_positions(count, accessor);

        // Orientation must be measured on the raw sequence, before it's reversed or closed.
        let actual = winding(&positions);
        if actual != required {
            log::trace!("Reversing {actual:?} ring of {count} points to {required:?}");
            positions.reverse();
        }

        let mut coordinates = self.positions_to_values(&positions);
        if let Some(first) = coordinates.first().cloned() {
            coordinates.push(first);
        }

        Ok(coordinates)
    }
}
