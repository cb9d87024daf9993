pub mod surface;
pub mod voxel;

pub use surface::{SurfaceModel, SurfaceModelBuilder, is_inside_earth};
pub use voxel::Voxel;
