//! [`GeoPosition`](crate::GeoPosition) implementations for `geo-types` coordinates and points. `x` is used as
//! longitude, `y` as latitude.

mod coord;
mod point;
