//! Voxel counts for simple solids. Pure voxel math: counts and volumes only,
//! independent of any identifier.

use crate::core::constants::VOXEL_SIZE_M;
use crate::util::error::UVoxError;
use std::f64::consts::PI;

/// Volume of one cubic voxel in m³ (~1e-18).
pub fn voxel_volume_m3() -> f64 {
    VOXEL_SIZE_M.powi(3)
}

fn check_length(value: f64, name: &str) -> Result<f64, UVoxError> {
    if value.is_nan() || value < 0.0 {
        return Err(UVoxError::InvalidDimension(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(value)
}

/// Number of voxels in a cube with the given side length in meters.
pub fn cube_voxels(side_m: f64) -> Result<u64, UVoxError> {
    let side_m = check_length(side_m, "Side length")?;
    Ok((side_m / VOXEL_SIZE_M).powi(3).floor() as u64)
}

/// Number of voxels in a sphere with the given radius in meters.
pub fn sphere_voxels(radius_m: f64) -> Result<u64, UVoxError> {
    let radius_m = check_length(radius_m, "Radius")?;
    let volume_m3 = (4.0 / 3.0) * PI * radius_m.powi(3);
    Ok((volume_m3 / voxel_volume_m3()).floor() as u64)
}

/// Number of voxels in a cylinder with the given radius and height in meters.
pub fn cylinder_voxels(radius_m: f64, height_m: f64) -> Result<u64, UVoxError> {
    let radius_m = check_length(radius_m, "Radius")?;
    let height_m = check_length(height_m, "Height")?;
    let volume_m3 = PI * radius_m.powi(2) * height_m;
    Ok((volume_m3 / voxel_volume_m3()).floor() as u64)
}
