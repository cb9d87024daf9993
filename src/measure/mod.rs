//! Measurements on decoded identifiers: distances, areas, orientation,
//! voxel volumes, unit conversion and the Earth ellipsoid.

pub mod area;
pub mod distance;
pub mod earth;
pub mod orientation;
pub mod units;
pub mod volume;

pub use area::{area_between_voxels, spherical_patch_area};
pub use distance::{haversine_distance, linear_distance};
pub use earth::{
    Ellipsoid, FlatTerrain, TerrainModel, angular_resolution, cubic_equivalent_voxel_count,
    earth_radius_at_lat,
};
pub use orientation::{SphericalDelta, spherical_delta};
pub use units::{VoxelUnit, from_voxels, to_voxels};
pub use volume::{cube_voxels, cylinder_voxels, sphere_voxels, voxel_volume_m3};
