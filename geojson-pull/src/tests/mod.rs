use serde_json::Value;

/// Installs a logger for the test run, so `RUST_LOG=trace` shows the ring decisions.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Longitude and latitude of every position of a ring document, including the closing one.
pub fn ring_positions(ring: &Value) -> Vec<(f64, f64)> {
    ring.as_array()
        .expect("ring must be an array")
        .iter()
        .map(|position| {
            let lon = position[0].as_f64().expect("lon must be a number");
            let lat = position[1].as_f64().expect("lat must be a number");
            (lon, lat)
        })
        .collect()
}

/// Counterclockwise square exterior with one clockwise and one counterclockwise hole.
pub struct PolygonFixture {
    outer: Vec<[f64; 3]>,
    inners: Vec<Vec<[f64; 3]>>,
}

impl PolygonFixture {
    pub fn with_holes() -> Self {
        Self {
            outer: vec![
                [0.0, 0.0, 0.5],
                [1.5, 0.0, 0.3],
                [1.5, 1.5, 0.6],
                [0.0, 1.5, 0.9],
            ],
            inners: vec![
                vec![[0.25, 0.25, 0.5], [0.35, 0.75, 0.6], [0.5, 0.25, 0.7]],
                vec![[1.0, 0.25, 0.5], [1.25, 0.25, 0.6], [1.125, 0.5, 0.7]],
            ],
        }
    }

    pub fn ring_count(&self) -> usize {
        self.inners.len() + 1
    }

    pub fn ring_length(&self, ring: usize) -> usize {
        self.ring(ring).len()
    }

    pub fn point(&self, ring: usize, point: usize) -> [f64; 3] {
        self.ring(ring)[point]
    }

    fn ring(&self, ring: usize) -> &[[f64; 3]] {
        if ring == 0 {
            &self.outer
        } else {
            &self.inners[ring - 1]
        }
    }
}

/// Two polygons: the [`PolygonFixture`] one and a clockwise triangle without holes.
pub struct MultiPolygonFixture {
    polygons: Vec<PolygonFixture>,
}

impl MultiPolygonFixture {
    pub fn new() -> Self {
        Self {
            polygons: vec![
                PolygonFixture::with_holes(),
                PolygonFixture {
                    outer: vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 2.0, 9.0]],
                    inners: vec![],
                },
            ],
        }
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    pub fn ring_count(&self, polygon: usize) -> usize {
        self.polygons[polygon].ring_count()
    }

    pub fn ring_length(&self, polygon: usize, ring: usize) -> usize {
        self.polygons[polygon].ring_length(ring)
    }

    pub fn point(&self, polygon: usize, ring: usize, point: usize) -> [f64; 3] {
        self.polygons[polygon].point(ring, point)
    }
}
