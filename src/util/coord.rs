use geo_types::Point;

/// Microdegrees per degree.
pub const MICRODEG_PER_DEG: f64 = 1e6;

/// Trait for types that can provide longitude/latitude in degrees.
///
/// Implemented for `(lon, lat)` tuples and `geo_types::Point<f64>`, so
/// functions can accept either type.
pub trait Coordinate {
    /// Longitude in degrees (x).
    fn lon_deg(&self) -> f64;
    /// Latitude in degrees (y).
    fn lat_deg(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lon_deg(&self) -> f64 {
        self.0
    }
    fn lat_deg(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lon_deg(&self) -> f64 {
        self.x()
    }
    fn lat_deg(&self) -> f64 {
        self.y()
    }
}

/// Converts degrees to the nearest whole microdegree.
pub fn degrees_to_microdeg(degrees: f64) -> i64 {
    (degrees * MICRODEG_PER_DEG).round() as i64
}

pub fn microdeg_to_degrees(microdeg: i64) -> f64 {
    microdeg as f64 / MICRODEG_PER_DEG
}

pub fn microdeg_to_radians(microdeg: i64) -> f64 {
    microdeg_to_degrees(microdeg).to_radians()
}

/// Converts micrometers to meters.
pub fn um_to_m(um: u64) -> f64 {
    um as f64 * 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (-80.19, 25.76);
        assert_eq!(tuple.lon_deg(), -80.19);
        assert_eq!(tuple.lat_deg(), 25.76);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(-80.19, 25.76);
        assert_eq!(point.lon_deg(), -80.19);
        assert_eq!(point.lat_deg(), 25.76);
    }

    #[test]
    fn test_degree_conversion() {
        assert_eq!(degrees_to_microdeg(25.76), 25_760_000);
        assert_eq!(degrees_to_microdeg(-80.190001), -80_190_001);
        assert_eq!(microdeg_to_degrees(-90_000_000), -90.0);
        assert!((microdeg_to_radians(180_000_000) - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_um_to_m() {
        assert_eq!(um_to_m(1_000_000), 1.0);
        assert_eq!(um_to_m(0), 0.0);
    }
}
