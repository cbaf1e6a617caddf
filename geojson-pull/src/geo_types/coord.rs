use geo_types::Coord;

use crate::position::GeoPosition;

impl GeoPosition for Coord<f64> {
    fn lon(&self) -> f64 {
        self.x
    }

    fn lat(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use geo_types::{coord, LineString};
    use serde_json::json;

    use crate::geometry::line_string;

    #[test]
    fn line_string_from_coords() {
        let line: LineString<f64> = vec![coord! { x: 1.0, y: 2.0 }, coord! { x: 3.0, y: 4.0 }].into();
        let value = line_string(line.0.len(), |i| line.0[i]).expect("valid line");

        assert_eq!(
            value,
            json!({"type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]]})
        );
    }
}
