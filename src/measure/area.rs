use crate::core::identifier::{UVoxId, decode_uvoxid};
use crate::util::coord::{microdeg_to_degrees, um_to_m};
use crate::util::error::UVoxError;

/// Area in m² of the patch of a sphere bounded by two parallels and two
/// meridians.
///
/// `A = R² · Δλ · |sin φ2 − sin φ1|`, with the radius in micrometers and the
/// bounds in degrees.
///
/// # Example
/// ```
/// use uvoxid::{spherical_patch_area, EARTH_RADIUS_UM};
///
/// let area = spherical_patch_area(EARTH_RADIUS_UM, 0.0, 1.0, 0.0, 1.0);
/// assert!((area - 1.23e10).abs() < 1.23e10 * 0.02);
/// ```
pub fn spherical_patch_area(
    r_um: u64,
    lat1_deg: f64,
    lat2_deg: f64,
    lon1_deg: f64,
    lon2_deg: f64,
) -> f64 {
    let r_m = um_to_m(r_um);
    let delta_lon = (lon2_deg.to_radians() - lon1_deg.to_radians()).abs();
    let band = (lat2_deg.to_radians().sin() - lat1_deg.to_radians().sin()).abs();
    r_m * r_m * delta_lon * band
}

/// Area in m² of the patch whose opposite corners are two voxels on the
/// same shell.
///
/// # Errors
///
/// - [`UVoxError::ShellMismatch`] - the voxels have different radii
pub fn area_between_voxels(a: &UVoxId, b: &UVoxId) -> Result<f64, UVoxError> {
    let (r1, lat1, lon1) = decode_uvoxid(a);
    let (r2, lat2, lon2) = decode_uvoxid(b);

    if r1 != r2 {
        return Err(UVoxError::ShellMismatch { r1, r2 });
    }

    Ok(spherical_patch_area(
        r1,
        microdeg_to_degrees(lat1),
        microdeg_to_degrees(lat2),
        microdeg_to_degrees(lon1),
        microdeg_to_degrees(lon2),
    ))
}
