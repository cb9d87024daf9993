use crate::core::identifier::{UVoxId, decode_uvoxid};
use crate::util::coord::MICRODEG_PER_DEG;
use serde::Serialize;

/// Signed offset from one voxel to another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SphericalDelta {
    /// Radius change in micrometers
    pub dr_um: i128,
    /// Latitude change in degrees
    pub dlat_deg: f64,
    /// Longitude change in degrees, normalized into [-180, 180]
    pub dlon_deg: f64,
}

/// Computes the offset from `from` to `to`.
///
/// # Example
/// ```
/// use uvoxid::{encode_uvoxid, spherical_delta, EARTH_RADIUS_UM};
///
/// let miami = encode_uvoxid(EARTH_RADIUS_UM, 25_760_000, -80_190_000);
/// let nyc = encode_uvoxid(EARTH_RADIUS_UM, 40_710_000, -74_010_000);
///
/// let delta = spherical_delta(&miami, &nyc);
/// assert_eq!(delta.dr_um, 0);
/// assert!((delta.dlat_deg - 14.95).abs() < 1e-9);
/// assert!((delta.dlon_deg - 6.18).abs() < 1e-9);
/// ```
pub fn spherical_delta(from: &UVoxId, to: &UVoxId) -> SphericalDelta {
    let (r1, lat1, lon1) = decode_uvoxid(from);
    let (r2, lat2, lon2) = decode_uvoxid(to);

    let dr_um = r2 as i128 - r1 as i128;
    let dlat_deg = (lat2 as i128 - lat1 as i128) as f64 / MICRODEG_PER_DEG;
    let mut dlon_deg = (lon2 as i128 - lon1 as i128) as f64 / MICRODEG_PER_DEG;

    if dlon_deg > 180.0 {
        dlon_deg -= 360.0;
    } else if dlon_deg < -180.0 {
        dlon_deg += 360.0;
    }

    SphericalDelta {
        dr_um,
        dlat_deg,
        dlon_deg,
    }
}
