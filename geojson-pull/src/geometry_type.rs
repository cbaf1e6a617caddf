//! See documentation for [`GeoJsonType`].

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Kind of a GeoJSON object. The [`name`](GeoJsonType::name) of the kind is written into the `type` member of
/// every produced document.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub enum GeoJsonType {
    /// Single position.
    Point,
    /// Set of positions.
    MultiPoint,
    /// Sequence of two or more positions.
    LineString,
    /// Set of line strings.
    MultiLineString,
    /// Exterior linear ring with optional holes.
    Polygon,
    /// Set of polygons.
    MultiPolygon,
    /// Set of arbitrary geometries.
    GeometryCollection,
    /// Geometry with properties.
    Feature,
    /// Set of features.
    FeatureCollection,
}

impl GeoJsonType {
    /// All the kinds, in the order they are defined by RFC 7946.
    pub const ALL: [GeoJsonType; 9] = [
        Self::Point,
        Self::MultiPoint,
        Self::LineString,
        Self::MultiLineString,
        Self::Polygon,
        Self::MultiPolygon,
        Self::GeometryCollection,
        Self::Feature,
        Self::FeatureCollection,
    ];

    /// Value of the `type` member for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
            Self::Feature => "Feature",
            Self::FeatureCollection => "FeatureCollection",
        }
    }

    /// Returns true for the geometry kinds, false for `Feature` and `FeatureCollection`.
    pub const fn is_geometry(self) -> bool {
        !matches!(self, Self::Feature | Self::FeatureCollection)
    }
}

impl Display for GeoJsonType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
