//! Geometry objects built with the default [`Encoder`].

use serde_json::{Map, Value};

use crate::encoder::Encoder;
use crate::error::Result;
use crate::geometry_type::GeoJsonType;
use crate::position::GeoPosition;
use crate::winding::Winding;

/// Returns a Point object. See [`Encoder::point`].
pub fn point(position: impl GeoPosition) -> Value {
    Encoder::default().point(position)
}

/// Returns a MultiPoint object. See [`Encoder::multi_point`].
pub fn multi_point<P, F>(count: usize, accessor: F) -> Value
where
    P: GeoPosition,
    F: FnMut(usize) -> P,
{
    Encoder::default().multi_point(count, accessor)
}

/// Returns a LineString object. See [`Encoder::line_string`].
pub fn line_string<P, F>(count: usize, accessor: F) -> Result<Value>
where
    P: GeoPosition,
    F: FnMut(usize) -> P,
{
    Encoder::default().line_string(count, accessor)
}

/// Returns a MultiLineString object. See [`Encoder::multi_line_string`].
pub fn multi_line_string<P, L, F>(line_count: usize, line_length: L, accessor: F) -> Result<Value>
where
    P: GeoPosition,
    L: FnMut(usize) -> usize,
    F: FnMut(usize, usize) -> P,
{
    Encoder::default().multi_line_string(line_count, line_length, accessor)
}

/// Returns the coordinates of a closed linear ring with the given winding. See
/// [`Encoder::linear_ring_coordinates`].
///
/// A linear ring is not a GeoJSON object of its own, so the result is the bare position list rather than a
/// `{"type", "coordinates"}` object.
pub fn linear_ring<P, F>(count: usize, winding: Winding, accessor: F) -> Result<Vec<Value>>
where
    P: GeoPosition,
    F: FnMut(usize) -> P,
{
    Encoder::default().linear_ring_coordinates(count, winding, accessor)
}

/// Returns a Polygon object with a counterclockwise exterior ring and clockwise holes. See [`Encoder::polygon`].
///
/// ```
/// use geojson_pull::polygon;
/// use serde_json::json;
///
/// let outer = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
/// let value = polygon(1, |_| outer.len(), |_, i| outer[i])?;
///
/// assert_eq!(
///     value,
///     json!({
///         "type": "Polygon",
///         "coordinates": [[[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0]]]
///     })
/// );
/// # Ok::<(), geojson_pull::GeoJsonError>(())
/// ```
pub fn polygon<P, L, F>(ring_count: usize, ring_length: L, accessor: F) -> Result<Value>
where
    P: GeoPosition,
    L: FnMut(usize) -> usize,
    F: FnMut(usize, usize) -> P,
{
    Encoder::default().polygon(ring_count, ring_length, accessor)
}

/// Returns a MultiPolygon object. See [`Encoder::multi_polygon`].
pub fn multi_polygon<P, R, L, F>(
    polygon_count: usize,
    ring_count: R,
    ring_length: L,
    accessor: F,
) -> Result<Value>
where
    P: GeoPosition,
    R: FnMut(usize) -> usize,
    L: FnMut(usize, usize) -> usize,
    F: FnMut(usize, usize, usize) -> P,
{
    Encoder::default().multi_polygon(polygon_count, ring_count, ring_length, accessor)
}

/// Returns a GeometryCollection object (RFC 7946, section 3.1.8).
///
/// `accessor` takes the geometry index and returns an already built geometry object. The geometries are not
/// inspected.
pub fn geometry_collection<F>(count: usize, accessor: F) -> Value
where
    F: FnMut(usize) -> Value,
{
    let geometries = (0..count).map(accessor).collect();

    let mut object = Map::new();
    object.insert(
        "type".to_string(),
        Value::from(GeoJsonType::GeometryCollection.name()),
    );
    object.insert("geometries".to_string(), Value::Array(geometries));
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use insta::assert_snapshot;
    use serde_json::json;

    use super::*;
    use crate::error::GeoJsonError;
    use crate::tests::{ring_positions, MultiPolygonFixture, PolygonFixture};
    use crate::winding::winding;

    #[test]
    fn point_2d_and_3d() {
        assert_eq!(
            point((5.3, 10.4)),
            json!({"type": "Point", "coordinates": [5.3, 10.4]})
        );
        assert_eq!(
            point([2.1, 3.4, 4.5]),
            json!({"type": "Point", "coordinates": [2.1, 3.4, 4.5]})
        );
    }

    #[test]
    fn multi_point_3d() {
        let points = [[0.0, 1.1, 2.2], [3.3, 4.4, 5.5]];
        assert_eq!(
            multi_point(points.len(), |i| points[i]),
            json!({"type": "MultiPoint", "coordinates": [[0.0, 1.1, 2.2], [3.3, 4.4, 5.5]]})
        );
    }

    #[test]
    fn line_string_2d() {
        let points = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5];
        let value = line_string(points.len() / 2, |i| (points[2 * i], points[2 * i + 1]))
            .expect("valid line");
        assert_snapshot!(value.to_string(), @r#"{"coordinates":[[0.0,0.5],[1.0,1.5],[2.0,2.5]],"type":"LineString"}"#);
    }

    #[test]
    fn line_string_requires_two_points() {
        assert_matches!(
            line_string(1, |_| (0.0, 0.0)),
            Err(GeoJsonError::TooFewPoints { .. })
        );
    }

    #[test]
    fn multi_line_string_2d() {
        let lines = [vec![(0.0, 0.5), (1.0, 1.5), (2.0, 2.5)], vec![(2.0, 3.0), (4.0, 5.0)]];
        let value = multi_line_string(lines.len(), |l| lines[l].len(), |l, p| lines[l][p])
            .expect("valid lines");

        assert_eq!(
            value,
            json!({
                "type": "MultiLineString",
                "coordinates": [[[0.0, 0.5], [1.0, 1.5], [2.0, 2.5]], [[2.0, 3.0], [4.0, 5.0]]]
            })
        );
    }

    #[test]
    fn linear_ring_uses_requested_winding() {
        let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let ring = linear_ring(4, Winding::Clockwise, |i| square[i]).expect("valid ring");
        assert_eq!(
            winding(&ring_positions(&Value::Array(ring))),
            Winding::Clockwise
        );
    }

    #[test]
    fn polygon_object() {
        let fixture = PolygonFixture::with_holes();
        let value = polygon(fixture.ring_count(), |r| fixture.ring_length(r), |r, p| {
            fixture.point(r, p)
        })
        .expect("valid polygon");

        assert_eq!(value["type"], json!("Polygon"));
        let rings = value["coordinates"].as_array().expect("rings");
        assert_eq!(rings.len(), 3);
        assert_eq!(
            winding(&ring_positions(&rings[0])),
            Winding::CounterClockwise
        );
        assert_eq!(winding(&ring_positions(&rings[1])), Winding::Clockwise);
        assert_eq!(winding(&ring_positions(&rings[2])), Winding::Clockwise);
    }

    #[test]
    fn multi_polygon_object() {
        let fixture = MultiPolygonFixture::new();
        let build = || {
            multi_polygon(
                fixture.polygon_count(),
                |poly| fixture.ring_count(poly),
                |poly, ring| fixture.ring_length(poly, ring),
                |poly, ring, point| fixture.point(poly, ring, point),
            )
            .expect("valid multipolygon")
        };

        let value = build();
        assert_eq!(value["type"], json!("MultiPolygon"));
        assert_eq!(value["coordinates"].as_array().map(Vec::len), Some(2));

        // Same input gives the same document.
        assert_eq!(value, build());
    }

    #[test]
    fn geometry_collection_keeps_order() {
        let geometries = [point((1.0, 2.0)), point((3.0, 4.0, 5.0))];
        let value = geometry_collection(geometries.len(), |i| geometries[i].clone());

        assert_eq!(
            value,
            json!({
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Point", "coordinates": [1.0, 2.0]},
                    {"type": "Point", "coordinates": [3.0, 4.0, 5.0]}
                ]
            })
        );
    }

    #[test]
    fn geometry_collection_empty() {
        let value = geometry_collection(0, |_| unreachable!());
        assert_snapshot!(value.to_string(), @r#"{"geometries":[],"type":"GeometryCollection"}"#);
    }
}
