//! # uvoxid
//!
//! A lossless 192-bit identifier for a point in spherical space. A `UVoxId`
//! packs a radius in micrometers with latitude and longitude in
//! microdegrees, and can be written as hex, Base-32 or raw bytes.
//!
//! There are currently three main entry points.
//!
//! ### 1. `encode_uvoxid` / `decode_uvoxid` - The Codec
//!
//! ```
//! use uvoxid::{encode_uvoxid, decode_uvoxid, EARTH_RADIUS_UM};
//!
//! let id = encode_uvoxid(EARTH_RADIUS_UM, 0, 0);
//! assert_eq!(decode_uvoxid(&id), (EARTH_RADIUS_UM, 0, 0));
//! println!("{}", id); // uvoxid:AAAALS25GEPAA-AAAAAAAFLVFIA-AAAAAAAKXKKQA
//! ```
//!
//! ### 2. Formats and Tolerance
//!
//! ```
//! use uvoxid::{encode_uvoxid, uvoxid_to_hex, hex_to_uvoxid, equal_within_tolerance, EARTH_RADIUS_UM};
//!
//! # fn main() -> Result<(), uvoxid::UVoxError> {
//! let a = encode_uvoxid(EARTH_RADIUS_UM, 25_760_000, -80_190_000);
//! let b = encode_uvoxid(EARTH_RADIUS_UM, 25_760_001, -80_190_001);
//!
//! assert_eq!(hex_to_uvoxid(&uvoxid_to_hex(&a))?, a);
//! assert!(equal_within_tolerance(&a, &b, 6)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `Voxel` - Decoded Voxels and Measurements
//!
//! ```
//! use uvoxid::{Voxel, EARTH_RADIUS_UM};
//!
//! let miami = Voxel::from_degrees(&(-80.19, 25.76), EARTH_RADIUS_UM);
//! let nyc = Voxel::from_degrees(&(-74.01, 40.71), EARTH_RADIUS_UM);
//!
//! let km = miami.surface_distance_to(&nyc) / 1000.0;
//! assert!(km > 1700.0 && km < 1800.0);
//! ```
//!

pub mod api;
pub mod core;
pub mod measure;
pub mod util;

pub use api::{SurfaceModel, SurfaceModelBuilder, Voxel, is_inside_earth};
pub use crate::core::{
    BYTE_LEN, DISPLAY_WIDTH, EARTH_RADIUS_UM, Format, LAT_OFFSET, LON_OFFSET, MAX_SIG_CHARS,
    PREFIX, Resolution, TOTAL_BITS, UVoxId, base32_flat_to_uvoxid, base32_to_uvoxid,
    base64_to_uvoxid, bin_to_uvoxid, decimal_to_uvoxid, decode_uvoxid, encode_uvoxid,
    equal_within_tolerance, format_length, hex_to_uvoxid, snap_to_tolerance, truncate_to_tolerance,
    uvoxid_scale, uvoxid_to_base32, uvoxid_to_base32_flat, uvoxid_to_base64, uvoxid_to_bin,
    uvoxid_to_decimal, uvoxid_to_hex,
};
pub use measure::{
    Ellipsoid, FlatTerrain, SphericalDelta, TerrainModel, VoxelUnit, angular_resolution,
    area_between_voxels, cube_voxels, cubic_equivalent_voxel_count, cylinder_voxels,
    earth_radius_at_lat, from_voxels, haversine_distance, linear_distance, sphere_voxels,
    spherical_delta, spherical_patch_area, to_voxels, voxel_volume_m3,
};
pub use util::{Coordinate, UVoxError, degrees_to_microdeg, microdeg_to_degrees};

pub use geo_types;
