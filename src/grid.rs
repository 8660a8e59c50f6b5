//! Bounding boxes and grid sampling for bulk collection runs.

use crate::enviroscan::LatLon;

/// A rectangular sampling region in degrees.
///
/// Sampling walks each axis from its minimum (inclusive) while strictly below
/// its maximum, latitude-major, so a box degenerate on either axis yields no
/// points.
///
/// # Examples
///
/// ```
/// use enviroscan::BoundingBox;
///
/// let delhi = BoundingBox::new(28.4, 28.9, 76.8, 77.4);
/// let points = delhi.sample(0.10);
/// assert_eq!(points[0], enviroscan::LatLon(28.4, 76.8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Samples the box at `step` degrees per axis. A non-positive step yields
    /// no points.
    pub fn sample(&self, step: f64) -> Vec<LatLon> {
        if step <= 0.0 {
            return vec![];
        }
        let mut points = Vec::new();
        let mut lat = self.min_lat;
        while lat < self.max_lat {
            let mut lon = self.min_lon;
            while lon < self.max_lon {
                points.push(LatLon(lat, lon));
                lon += step;
            }
            lat += step;
        }
        points
    }
}
