//! [`Encoder`] assembles geometry documents according to [`EncoderOptions`].
//!
//! The crate-level functions ([`point`](crate::point), [`polygon`](crate::polygon) etc.) use the default options:
//! counterclockwise exterior rings, clockwise holes, and coordinates written exactly as given by the accessors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::geometry_type::GeoJsonType;
use crate::position::{position_value, GeoPosition};
use crate::winding::Winding;

/// Configuration of an [`Encoder`].
///
/// Options can be deserialized from any serde format, missing fields take their default values:
///
/// ```
/// use geojson_pull::{EncoderOptions, Winding};
///
/// let options: EncoderOptions = serde_json::from_str(r#"{"exterior_winding": "clockwise"}"#)?;
/// assert_eq!(options.exterior_winding, Winding::Clockwise);
/// assert_eq!(options.precision, None);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOptions {
    /// Winding of the exterior (first) ring of every polygon. Holes get the opposite winding.
    ///
    /// Defaults to [`Winding::CounterClockwise`] as required by RFC 7946.
    pub exterior_winding: Winding,
    /// Number of decimal places to round output coordinates to. `None` writes values unchanged.
    ///
    /// Ring orientation is always computed on the unrounded values. More than 15 digits leaves values unchanged.
    pub precision: Option<u8>,
}

/// Assembles GeoJSON documents from index based accessors.
///
/// ```
/// use geojson_pull::{Encoder, Winding};
/// use serde_json::json;
///
/// let encoder = Encoder::default().with_exterior_winding(Winding::Clockwise);
/// let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// let polygon = encoder.polygon(1, |_| square.len(), |_, i| square[i])?;
///
/// assert_eq!(
///     polygon["coordinates"][0],
///     json!([[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0], [0.0, 1.0]])
/// );
/// # Ok::<(), geojson_pull::GeoJsonError>(())
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Encoder {
    options: EncoderOptions,
}

impl From<EncoderOptions> for Encoder {
    fn from(options: EncoderOptions) -> Self {
        Self::new(options)
    }
}

impl Encoder {
    /// Creates a new encoder with the given options.
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    /// Options of the encoder.
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Sets the winding of exterior rings. Holes get the opposite winding.
    pub fn with_exterior_winding(mut self, winding: Winding) -> Self {
        self.options.exterior_winding = winding;
        self
    }

    /// Rounds output coordinates to the given number of decimal places.
    pub fn with_precision(mut self, digits: u8) -> Self {
        self.options.precision = Some(digits);
        self
    }

    /// Returns a position array (RFC 7946, section 3.1.1).
    pub fn position<P: GeoPosition>(&self, position: P) -> Value {
        self.position_value(&position)
    }

    /// Returns a Point object (RFC 7946, section 3.1.2).
    pub fn point<P: GeoPosition>(&self, position: P) -> Value {
        coordinates_object(GeoJsonType::Point, self.position_value(&position))
    }

    /// Returns a MultiPoint object (RFC 7946, section 3.1.3).
    ///
    /// `accessor` is called once for every point index in `0..count`. Zero points give an empty MultiPoint.
    pub fn multi_point<P, F>(&self, count: usize, accessor: F) -> Value
    where
        P: GeoPosition,
        F: FnMut(usize) -> P,
    {
        coordinates_object(
            GeoJsonType::MultiPoint,
            Value::Array(self.multi_point_coordinates(count, accessor)),
        )
    }

    /// Returns a LineString object (RFC 7946, section 3.1.4).
    ///
    /// Fails without calling `accessor` if `count` is less than 2.
    pub fn line_string<P, F>(&self, count: usize, accessor: F) -> Result<Value>
    where
        P: GeoPosition,
        F: FnMut(usize) -> P,
    {
        Ok(coordinates_object(
            GeoJsonType::LineString,
            Value::Array(self.line_string_coordinates(count, accessor)?),
        ))
    }

    /// Returns a MultiLineString object (RFC 7946, section 3.1.5).
    ///
    /// * `line_length` - takes the line index and returns the number of points in the line
    /// * `accessor` - takes the line and point indices and returns the position
    ///
    /// Every line must have at least 2 points, otherwise the error names the index of the failed line.
    pub fn multi_line_string<P, L, F>(
        &self,
        line_count: usize,
        line_length: L,
        accessor: F,
    ) -> Result<Value>
    where
        P: GeoPosition,
        L: FnMut(usize) -> usize,
        F: FnMut(usize, usize) -> P,
    {
        Ok(coordinates_object(
            GeoJsonType::MultiLineString,
            Value::Array(self.multi_line_string_coordinates(line_count, line_length, accessor)?),
        ))
    }

    /// Returns a Polygon object (RFC 7946, section 3.1.6).
    ///
    /// * `ring_length` - takes the ring index and returns the number of points in the ring, without the closing
    ///   point
    /// * `accessor` - takes the ring and point indices and returns the position
    ///
    /// Ring `0` is the exterior ring, all the others are holes. Rings are reoriented and closed, see
    /// [`Encoder::linear_ring_coordinates`].
    pub fn polygon<P, L, F>(&self, ring_count: usize, ring_length: L, accessor: F) -> Result<Value>
    where
        P: GeoPosition,
        L: FnMut(usize) -> usize,
        F: FnMut(usize, usize) -> P,
    {
        Ok(coordinates_object(
            GeoJsonType::Polygon,
            Value::Array(self.polygon_coordinates(ring_count, ring_length, accessor)?),
        ))
    }

    /// Returns a MultiPolygon object (RFC 7946, section 3.1.7).
    ///
    /// * `ring_count` - takes the polygon index and returns the number of rings in it
    /// * `ring_length` - takes the polygon and ring indices and returns the number of points in the ring
    /// * `accessor` - takes the polygon, ring and point indices and returns the position
    ///
    /// Every polygon is assembled as by [`Encoder::polygon`].
    pub fn multi_polygon<P, R, L, F>(
        &self,
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
        Ok(coordinates_object(
            GeoJsonType::MultiPolygon,
            Value::Array(self.multi_polygon_coordinates(
                polygon_count,
                ring_count,
                ring_length,
                accessor,
            )?),
        ))
    }

    pub(crate) fn position_value<P: GeoPosition + ?Sized>(&self, position: &P) -> Value {
        position_value(position, self.options.precision)
    }
}

/// Object of the form `{"type": <kind>, "coordinates": <coordinates>}`.
pub(crate) fn coordinates_object(kind: GeoJsonType, coordinates: Value) -> Value {
    let mut object = Map::new();
    object.insert("type".to_string(), Value::from(kind.name()));
    object.insert("coordinates".to_string(), coordinates);
    Value::Object(object)
}
