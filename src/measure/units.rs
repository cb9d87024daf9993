use crate::core::constants::VOXEL_SIZE_M;
use crate::util::error::UVoxError;
use std::fmt;
use std::str::FromStr;

/// Length units that can be converted to and from 1 µm voxel counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoxelUnit {
    Micrometer,
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl VoxelUnit {
    pub const ALL: [VoxelUnit; 9] = [
        VoxelUnit::Micrometer,
        VoxelUnit::Millimeter,
        VoxelUnit::Centimeter,
        VoxelUnit::Meter,
        VoxelUnit::Kilometer,
        VoxelUnit::Inch,
        VoxelUnit::Foot,
        VoxelUnit::Yard,
        VoxelUnit::Mile,
    ];

    /// Length of one unit in meters.
    pub fn meters(&self) -> f64 {
        match self {
            VoxelUnit::Micrometer => 1e-6,
            VoxelUnit::Millimeter => 1e-3,
            VoxelUnit::Centimeter => 1e-2,
            VoxelUnit::Meter => 1.0,
            VoxelUnit::Kilometer => 1e3,
            VoxelUnit::Inch => 0.0254,
            VoxelUnit::Foot => 0.3048,
            VoxelUnit::Yard => 0.9144,
            VoxelUnit::Mile => 1609.34,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            VoxelUnit::Micrometer => "um",
            VoxelUnit::Millimeter => "mm",
            VoxelUnit::Centimeter => "cm",
            VoxelUnit::Meter => "m",
            VoxelUnit::Kilometer => "km",
            VoxelUnit::Inch => "in",
            VoxelUnit::Foot => "ft",
            VoxelUnit::Yard => "yd",
            VoxelUnit::Mile => "mi",
        }
    }
}

impl FromStr for VoxelUnit {
    type Err = UVoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower == "µm" {
            return Ok(VoxelUnit::Micrometer);
        }
        VoxelUnit::ALL
            .into_iter()
            .find(|unit| unit.symbol() == lower)
            .ok_or_else(|| UVoxError::UnsupportedUnit(s.to_string()))
    }
}

impl fmt::Display for VoxelUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Converts a length in `unit` to a whole number of 1 µm voxels (rounded).
///
/// # Example
/// ```
/// use uvoxid::{from_voxels, to_voxels, VoxelUnit};
///
/// # fn main() -> Result<(), uvoxid::UVoxError> {
/// let unit: VoxelUnit = "mm".parse()?;
/// let vox = to_voxels(1.0, unit);
/// assert_eq!(vox, 1000);
/// assert!((from_voxels(vox, unit) - 1.0).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
pub fn to_voxels(value: f64, unit: VoxelUnit) -> i64 {
    let meters = value * unit.meters();
    (meters / VOXEL_SIZE_M).round() as i64
}

/// Converts a voxel count to a length in `unit`.
pub fn from_voxels(voxels: i64, unit: VoxelUnit) -> f64 {
    let meters = voxels as f64 * VOXEL_SIZE_M;
    meters / unit.meters()
}
