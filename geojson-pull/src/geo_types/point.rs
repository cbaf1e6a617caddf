use geo_types::Point;

use crate::position::GeoPosition;

impl GeoPosition for Point<f64> {
    fn lon(&self) -> f64 {
        self.x()
    }

    fn lat(&self) -> f64 {
        self.y()
    }
}
