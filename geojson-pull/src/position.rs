//! Positions are the leaves of every geometry document.
//!
//! Accessor callbacks given to the assemblers return any type implementing [`GeoPosition`]. The return type of
//! the accessor decides whether the produced positions have two (`[lon, lat]`) or three (`[lon, lat, alt]`)
//! elements, so a single call never mixes dimensions.

use serde_json::Value;

/// A point in geographic coordinates: longitude and latitude in decimal degrees, and optionally an altitude in
/// ellipsoidal meters.
pub trait GeoPosition {
    /// Longitude in decimal degrees.
    fn lon(&self) -> f64;
    /// Latitude in decimal degrees.
    fn lat(&self) -> f64;
    /// Altitude in meters, if the position has one.
    fn alt(&self) -> Option<f64> {
        None
    }
}

/// Simple [`GeoPosition`] implementation.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Position {
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Altitude in meters.
    pub alt: Option<f64>,
}

impl Position {
    /// Creates a new 2d position.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            alt: None,
        }
    }

    /// Creates a new position with altitude.
    pub fn with_alt(lon: f64, lat: f64, alt: f64) -> Self {
        Self {
            lon,
            lat,
            alt: Some(alt),
        }
    }
}

impl GeoPosition for Position {
    fn lon(&self) -> f64 {
        self.lon
    }

    fn lat(&self) -> f64 {
        self.lat
    }

    fn alt(&self) -> Option<f64> {
        self.alt
    }
}

impl GeoPosition for (f64, f64) {
    fn lon(&self) -> f64 {
        self.0
    }

    fn lat(&self) -> f64 {
        self.1
    }
}

impl GeoPosition for (f64, f64, f64) {
    fn lon(&self) -> f64 {
        self.0
    }

    fn lat(&self) -> f64 {
        self.1
    }

    fn alt(&self) -> Option<f64> {
        Some(self.2)
    }
}

impl GeoPosition for [f64; 2] {
    fn lon(&self) -> f64 {
        self[0]
    }

    fn lat(&self) -> f64 {
        self[1]
    }
}

impl GeoPosition for [f64; 3] {
    fn lon(&self) -> f64 {
        self[0]
    }

    fn lat(&self) -> f64 {
        self[1]
    }

    fn alt(&self) -> Option<f64> {
        Some(self[2])
    }
}

impl<P: GeoPosition + ?Sized> GeoPosition for &P {
    fn lon(&self) -> f64 {
        (**self).lon()
    }

    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn alt(&self) -> Option<f64> {
        (**self).alt()
    }
}

/// Returns a position array (RFC 7946, section 3.1.1): `[lon, lat]` or `[lon, lat, alt]`.
///
/// ```
/// use geojson_pull::position;
/// use serde_json::json;
///
/// assert_eq!(position((5.3, 10.4)), json!([5.3, 10.4]));
/// assert_eq!(position([2.1, 3.4, 4.5]), json!([2.1, 3.4, 4.5]));
/// ```
pub fn position(position: impl GeoPosition) -> Value {
    position_value(&position, None)
}

pub(crate) fn position_value<P: GeoPosition + ?Sized>(position: &P, precision: Option<u8>) -> Value {
    let mut values = Vec::with_capacity(3);
    values.push(Value::from(round(position.lon(), precision)));
    values.push(Value::from(round(position.lat(), precision)));
    if let Some(alt) = position.alt() {
        values.push(Value::from(round(alt, precision)));
    }

    Value::Array(values)
}

/// Digits beyond this exceed the precision of `f64`, so rounding to them is a no-op.
const MAX_ROUNDING_DIGITS: u8 = 15;

/// Scaled values at or above 2^52 have no fractional part left to round.
const MAX_EXACT_SCALED: f64 = 4_503_599_627_370_496.0;

fn round(value: f64, precision: Option<u8>) -> f64 {
    let Some(digits) = precision else {
        return value;
    };
    if digits > MAX_ROUNDING_DIGITS {
        return value;
    }

    let factor = 10f64.powi(i32::from(digits));
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_SCALED {
        return value;
    }

    scaled.round() / factor
}

/// Calls the accessor for every index in `0..count` in ascending order and collects the results.
pub(crate) fn pull_positions<P, F>(count: usize, accessor: F) -> Vec<P>
where
    F: FnMut(usize) -> P,
{
    (0..count).map(accessor).collect()
}
