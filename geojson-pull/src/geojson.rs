//! Conversion of the produced documents into the typed representation of the `geojson` crate.

use serde_json::Value;

use crate::error::{GeoJsonError, Result};

/// Converts a document produced by this crate into a [`geojson::GeoJson`] object.
pub fn to_geojson(value: Value) -> Result<::geojson::GeoJson> {
    ::geojson::GeoJson::from_json_value(value).map_err(|err| GeoJsonError::Conversion(err.to_string()))
}
