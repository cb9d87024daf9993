//! Straight-line (chord) and great-circle (surface) distances.

use crate::core::identifier::{UVoxId, decode_uvoxid};
use crate::util::coord::{microdeg_to_radians, um_to_m};

/// `sin²(γ/2)` for the central angle `γ` between two points, in radians.
fn haversine_term(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    h.clamp(0.0, 1.0)
}

fn decoded_radians(id: &UVoxId) -> (f64, f64, f64) {
    let (r, lat, lon) = decode_uvoxid(id);
    (um_to_m(r), microdeg_to_radians(lat), microdeg_to_radians(lon))
}

/// Straight-line distance in meters between two voxels.
///
/// Law of cosines on `(r, lat, lon)` directly, so the radii may differ and
/// the result is the Euclidean chord through space. Written as
/// `(r1 - r2)² + 4·r1·r2·sin²(γ/2)`, which equals
/// `r1² + r2² - 2·r1·r2·cos γ` without cancelling at short range.
pub fn linear_distance(a: &UVoxId, b: &UVoxId) -> f64 {
    let (r1, lat1, lon1) = decoded_radians(a);
    let (r2, lat2, lon2) = decoded_radians(b);

    let h = haversine_term(lat1, lon1, lat2, lon2);
    let dr = r1 - r2;
    (dr * dr + 4.0 * r1 * r2 * h).sqrt()
}

/// Great-circle distance in meters along a sphere of the mean radius of
/// both voxels (haversine formula).
pub fn haversine_distance(a: &UVoxId, b: &UVoxId) -> f64 {
    let (r1, lat1, lon1) = decoded_radians(a);
    let (r2, lat2, lon2) = decoded_radians(b);

    let radius = (r1 + r2) / 2.0;
    let h = haversine_term(lat1, lon1, lat2, lon2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    radius * c
}
