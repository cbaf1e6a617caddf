//! Pull-based assembly of GeoJSON (RFC 7946) documents.
//!
//! The crate does not require any specific geometry types. Instead, the caller describes the geometry with
//! index-based accessors, and the assemblers pull positions out of them as they build the document:
//!
//! ```
//! use geojson_pull::{feature_with_id, polygon};
//! use serde_json::json;
//!
//! // Exterior ring given clockwise, hole given counterclockwise.
//! let rings = [
//!     vec![(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)],
//!     vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)],
//! ];
//! let geometry = polygon(rings.len(), |r| rings[r].len(), |r, p| rings[r][p])?;
//!
//! // Rings are reoriented and closed: exterior counterclockwise, holes clockwise.
//! assert_eq!(
//!     geometry["coordinates"][0],
//!     json!([[4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0], [4.0, 0.0]])
//! );
//! assert_eq!(
//!     geometry["coordinates"][1],
//!     json!([[2.0, 2.0], [2.0, 1.0], [1.0, 1.0], [2.0, 2.0]])
//! );
//!
//! let feature = feature_with_id("lake", Some(geometry), json!({"name": "Lake"}));
//! assert_eq!(feature["type"], "Feature");
//! # Ok::<(), geojson_pull::GeoJsonError>(())
//! ```
//!
//! Accessors are called in ascending index order, exactly once per index. The return type of the position accessor
//! (anything implementing [`GeoPosition`]) decides whether the output positions have an altitude.
//!
//! The crate-level functions use the default [`Encoder`]. Use an encoder with custom [`EncoderOptions`] to change
//! the ring winding convention or to round output coordinates.

pub mod error;
pub mod geometry_type;
pub mod position;
pub mod winding;

mod coordinates;
mod encoder;
mod feature;
mod geometry;
mod ring;

#[cfg(feature = "geo-types")]
mod geo_types;

#[cfg(feature = "geojson")]
pub mod geojson;

#[cfg(test)]
mod tests;

pub use coordinates::MIN_LINE_STRING_POINTS;
pub use encoder::{Encoder, EncoderOptions};
pub use error::{GeoJsonError, Result};
pub use feature::{feature, feature_collection, feature_with_id, properties, FeatureId};
pub use geometry::{
    geometry_collection, line_string, linear_ring, multi_line_string, multi_point, multi_polygon,
    point, polygon,
};
pub use geometry_type::GeoJsonType;
pub use position::{position, GeoPosition, Position};
pub use ring::MIN_RING_POINTS;
pub use winding::Winding;
