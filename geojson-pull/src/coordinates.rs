//! Builders of the `coordinates` member of geometry objects.
//!
//! All the builders pull positions through accessors in ascending index order, calling every accessor exactly once
//! per index. Counts and lengths of nested members are queried lazily, right before the member is built.

use serde_json::Value;

use crate::encoder::Encoder;
use crate::error::{GeoJsonError, Result};
use crate::position::{pull_positions, GeoPosition};

/// Minimum number of points in a line string.
pub const MIN_LINE_STRING_POINTS: usize = 2;

impl Encoder {
    /// Returns the coordinates array of a MultiPoint object.
    pub fn multi_point_coordinates<P, F>(&self, count: usize, accessor: F) -> Vec<Value>
    where
        P: GeoPosition,
        F: FnMut(usize) -> P,
    {
        self.positions_to_values(&pull_positions(count, accessor))
    }

    /// Returns the coordinates array of a LineString object.
    ///
    /// Fails without calling `accessor` if `count` is less than [`MIN_LINE_STRING_POINTS`].
    pub fn line_string_coordinates<P, F>(&self, count: usize, accessor: F) -> Result<Vec<Value>>
    where
        P: GeoPosition,
        F: FnMut(usize) -> P,
    {
        if count < MIN_LINE_STRING_POINTS {
            return Err(GeoJsonError::TooFewPoints {
                shape: "line string",
                required: MIN_LINE_STRING_POINTS,
                actual: count,
            });
        }

        Ok(self.multi_point_coordinates(count, accessor))
    }

    /// Returns the coordinates array of a MultiLineString object.
    pub fn multi_line_string_coordinates<P, L, F>(
        &self,
        line_count: usize,
        mut line_length: L,
        mut accessor: F,
    ) -> Result<Vec<Value>>
    where
        P: GeoPosition,
        L: FnMut(usize) -> usize,
        F: FnMut(usize, usize) -> P,
    {
        let mut lines = Vec::with_capacity(line_count);
        for line in 0..line_count {
            let coordinates = self
                .line_string_coordinates(line_length(line), |point| accessor(line, point))
                .map_err(|err| GeoJsonError::member("line", line, err))?;
            lines.push(Value::Array(coordinates));
        }

        Ok(lines)
    }

    /// Returns the coordinates array of a Polygon object.
    ///
    /// Ring `0` is built with the exterior winding of the encoder, all the following rings with the opposite one.
    /// A polygon without rings is an error.
    pub fn polygon_coordinates<P, L, F>(
        &self,
        ring_count: usize,
        mut ring_length: L,
        mut accessor: F,
    ) -> Result<Vec<Value>>
    where
        P: GeoPosition,
        L: FnMut(usize) -> usize,
        F: FnMut(usize, usize) -> P,
    {
        if ring_count == 0 {
            return Err(GeoJsonError::EmptyPolygon);
        }

        let exterior = self.options().exterior_winding;
        let mut rings = Vec::with_capacity(ring_count);
        for ring in 0..ring_count {
            let winding = if ring == 0 {
                exterior
            } else {
                exterior.opposite()
            };

            let coordinates = self
                .linear_ring_coordinates(ring_length(ring), winding, |point| {
                    accessor(ring, point)
                })
                .map_err(|err| GeoJsonError::member("ring", ring, err))?;
            rings.push(Value::Array(coordinates));
        }

        log::trace!("Assembled polygon with {ring_count} rings");
        Ok(rings)
    }

    /// Returns the coordinates array of a MultiPolygon object.
    ///
    /// Every polygon is built independently by [`Encoder::polygon_coordinates`].
    pub fn multi_polygon_coordinates<P, R, L, F>(
        &self,
        polygon_count: usize,
        mut ring_count: R,
        mut ring_length: L,
        mut accessor: F,
    ) -> Result<Vec<Value>>
    where
        P: GeoPosition,
        R: FnMut(usize) -> usize,
        L: FnMut(usize, usize) -> usize,
        F: FnMut(usize, usize, usize) -> P,
    {
        let mut polygons = Vec::with_capacity(polygon_count);
        for polygon in 0..polygon_count {
            let rings = self
                .polygon_coordinates(
                    ring_count(polygon),
                    |ring| ring_length(polygon, ring),
                    |ring, point| accessor(polygon, ring, point),
                )
                .map_err(|err| GeoJsonError::member("polygon", polygon, err))?;
            polygons.push(Value::Array(rings));
        }

        Ok(polygons)
    }

    pub(crate) fn positions_to_values<P: GeoPosition>(&self, positions: &[P]) -> Vec<Value> {
        positions.iter().map(|p| self.position_value(p)).collect()
    }
}
