//! Earth shape approximations in micrometers.

use crate::core::constants::{R_EQ_UM, R_POL_UM};
use crate::core::tolerance::check_sig_chars;
use crate::util::coord::{microdeg_to_radians, um_to_m};
use crate::util::error::UVoxError;
use std::f64::consts::PI;

/// An oblate spheroid given by its equatorial and polar radii in µm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub equatorial_um: u64,
    pub polar_um: u64,
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid {
        equatorial_um: R_EQ_UM,
        polar_um: R_POL_UM,
    };

    /// A sphere, for bodies modelled without flattening.
    pub const fn sphere(radius_um: u64) -> Self {
        Self {
            equatorial_um: radius_um,
            polar_um: radius_um,
        }
    }

    /// Geocentric radius in µm at the given latitude (floored).
    pub fn radius_at_lat(&self, lat_microdeg: i64) -> u64 {
        let phi = microdeg_to_radians(lat_microdeg);
        let (sin_phi, cos_phi) = phi.sin_cos();
        let a = self.equatorial_um as f64;
        let b = self.polar_um as f64;

        let numerator = (a * a * cos_phi).powi(2) + (b * b * sin_phi).powi(2);
        let denominator = (a * cos_phi).powi(2) + (b * sin_phi).powi(2);

        (numerator / denominator).sqrt().floor() as u64
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::WGS84
    }
}

/// Earth's WGS84 radius in µm at the given latitude.
pub fn earth_radius_at_lat(lat_microdeg: i64) -> u64 {
    Ellipsoid::WGS84.radius_at_lat(lat_microdeg)
}

/// Local surface elevation above the ellipsoid, in µm.
pub trait TerrainModel: Send + Sync {
    fn offset_um(&self, lat_microdeg: i64, lon_microdeg: i64) -> i64;
}

/// Terrain model with no relief: the surface is the ellipsoid itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatTerrain;

impl TerrainModel for FlatTerrain {
    fn offset_um(&self, _lat_microdeg: i64, _lon_microdeg: i64) -> i64 {
        0
    }
}

/// Linear size in meters of one angular voxel at radius `r_um`.
///
/// Half of the kept bits are assumed to resolve latitude and half longitude.
///
/// # Errors
///
/// - [`UVoxError::Range`] - `sig_chars` is above 38
pub fn angular_resolution(r_um: u64, sig_chars: usize) -> Result<f64, UVoxError> {
    let total_bits = check_sig_chars(sig_chars)? as f64;
    let delta_theta = (2.0 * PI) / 2f64.powf(total_bits / 2.0);
    Ok(um_to_m(r_um) * delta_theta)
}

/// How many 1 µm cubes of radial extent fit across one angular voxel face.
///
/// # Errors
///
/// - [`UVoxError::Range`] - `sig_chars` is above 38
pub fn cubic_equivalent_voxel_count(r_um: u64, sig_chars: usize) -> Result<f64, UVoxError> {
    let angular_size = angular_resolution(r_um, sig_chars)?;
    let radial_size = 1e-6;
    Ok((radial_size / angular_size).powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_at_equator_and_pole() {
        assert!(earth_radius_at_lat(0).abs_diff(R_EQ_UM) <= 1);
        let polar = earth_radius_at_lat(90_000_000);
        assert!(polar.abs_diff(R_POL_UM) <= 1);
        let south = earth_radius_at_lat(-90_000_000);
        assert!(south.abs_diff(R_POL_UM) <= 1);
    }

    #[test]
    fn test_radius_decreases_toward_pole() {
        let equator = earth_radius_at_lat(0);
        let mid = earth_radius_at_lat(45_000_000);
        let pole = earth_radius_at_lat(90_000_000);
        assert!(equator > mid && mid > pole);
    }

    #[test]
    fn test_sphere_is_constant() {
        let sphere = Ellipsoid::sphere(1_000_000);
        assert!(sphere.radius_at_lat(0).abs_diff(1_000_000) <= 1);
        assert!(sphere.radius_at_lat(33_000_000).abs_diff(1_000_000) <= 1);
    }

    #[test]
    fn test_flat_terrain() {
        assert_eq!(FlatTerrain.offset_um(25_760_000, -80_190_000), 0);
    }

    #[test]
    fn test_angular_resolution() -> Result<(), UVoxError> {
        let coarse = angular_resolution(R_EQ_UM, 4)?;
        let expected = um_to_m(R_EQ_UM) * 2.0 * PI / 1024.0;
        assert!((coarse - expected).abs() < 1e-6);

        let fine = angular_resolution(R_EQ_UM, 38)?;
        assert!(fine < coarse);
        assert!(angular_resolution(R_EQ_UM, 39).is_err());
        Ok(())
    }

    #[test]
    fn test_cubic_equivalent_count() -> Result<(), UVoxError> {
        let count = cubic_equivalent_voxel_count(R_EQ_UM, 20)?;
        let angular = angular_resolution(R_EQ_UM, 20)?;
        assert!((count - (1e-6 / angular).powi(2)).abs() < 1e-24);
        Ok(())
    }
}
