use crate::core::identifier::{UVoxId, decode_uvoxid, encode_uvoxid};
use crate::core::tolerance::{snap_to_tolerance, truncate_to_tolerance};
use crate::measure::distance::{haversine_distance, linear_distance};
use crate::measure::orientation::{SphericalDelta, spherical_delta};
use crate::util::coord::{Coordinate, microdeg_to_degrees, um_to_m};
use crate::util::error::UVoxError;
use geo_types::Point;
use serde::Serialize;

/// A single voxel: an identifier together with its decoded coordinate.
///
/// # Example
///
/// ```
/// use uvoxid::{Voxel, EARTH_RADIUS_UM};
///
/// # fn main() -> Result<(), uvoxid::UVoxError> {
/// // (lon, lat) in degrees
/// let voxel = Voxel::from_degrees(&(-80.19, 25.76), EARTH_RADIUS_UM);
/// println!("Voxel ID: {}", voxel.id);
///
/// let restored = Voxel::from_id_str(&voxel.id.to_string())?;
/// assert_eq!(voxel, restored);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Voxel {
    /// Packed identifier
    pub id: UVoxId,
    /// Distance from the origin in micrometers
    pub radius_um: u64,
    /// Latitude in microdegrees
    pub lat_microdeg: i64,
    /// Longitude in microdegrees
    pub lon_microdeg: i64,
}

impl Voxel {
    pub fn new(radius_um: u64, lat_microdeg: i64, lon_microdeg: i64) -> Self {
        Self {
            id: encode_uvoxid(radius_um, lat_microdeg, lon_microdeg),
            radius_um,
            lat_microdeg,
            lon_microdeg,
        }
    }

    pub fn from_id(id: UVoxId) -> Self {
        let (radius_um, lat_microdeg, lon_microdeg) = decode_uvoxid(&id);
        Self {
            id,
            radius_um,
            lat_microdeg,
            lon_microdeg,
        }
    }

    /// Create a Voxel from any textual identifier (hex, grouped or flat Base-32).
    pub fn from_id_str(text: &str) -> Result<Self, UVoxError> {
        Ok(Self::from_id(text.parse()?))
    }

    /// Create a Voxel from a `(lon, lat)` tuple or `Point` in degrees.
    ///
    /// Angles are rounded to the nearest microdegree.
    pub fn from_degrees(coord: &impl Coordinate, radius_um: u64) -> Self {
        Self::from_id(UVoxId::from_degrees(radius_um, coord))
    }

    pub fn lat_deg(&self) -> f64 {
        microdeg_to_degrees(self.lat_microdeg)
    }

    pub fn lon_deg(&self) -> f64 {
        microdeg_to_degrees(self.lon_microdeg)
    }

    pub fn radius_m(&self) -> f64 {
        um_to_m(self.radius_um)
    }

    /// Returns the `(lon, lat)` position in degrees as a `geo_types::Point`.
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lon_deg(), self.lat_deg())
    }

    /// The voxel at `sig_chars` precision.
    pub fn truncate(&self, sig_chars: usize) -> Result<Self, UVoxError> {
        Ok(Self::from_id(truncate_to_tolerance(&self.id, sig_chars)?))
    }

    pub fn snap(&self, sig_chars: usize) -> Result<String, UVoxError> {
        snap_to_tolerance(&self.id, sig_chars)
    }

    /// Straight-line distance in meters.
    pub fn distance_to(&self, other: &Voxel) -> f64 {
        linear_distance(&self.id, &other.id)
    }

    /// Great-circle distance in meters.
    pub fn surface_distance_to(&self, other: &Voxel) -> f64 {
        haversine_distance(&self.id, &other.id)
    }

    pub fn delta_to(&self, other: &Voxel) -> SphericalDelta {
        spherical_delta(&self.id, &other.id)
    }
}

impl From<UVoxId> for Voxel {
    fn from(id: UVoxId) -> Self {
        Self::from_id(id)
    }
}
