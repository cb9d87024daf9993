use crate::api::voxel::Voxel;
use crate::core::identifier::{UVoxId, decode_uvoxid};
use crate::measure::earth::{Ellipsoid, FlatTerrain, TerrainModel};
use crate::util::coord::{Coordinate, degrees_to_microdeg};
use std::fmt;

/// A planetary surface: an ellipsoid plus a terrain model on top of it.
///
/// # Example
///
/// ```
/// use uvoxid::{SurfaceModel, TerrainModel, Ellipsoid};
///
/// struct Plateau;
///
/// impl TerrainModel for Plateau {
///     fn offset_um(&self, _lat: i64, _lon: i64) -> i64 {
///         2_000_000_000 // 2 km everywhere
///     }
/// }
///
/// let surface = SurfaceModel::builder()
///     .ellipsoid(Ellipsoid::WGS84)
///     .terrain(Plateau)
///     .build();
///
/// let ground = surface.surface_radius_um(0, 0);
/// assert!(surface.is_inside(ground, 0, 0));
/// assert!(!surface.is_inside(ground + 1, 0, 0));
/// ```
pub struct SurfaceModel {
    ellipsoid: Ellipsoid,
    terrain: Box<dyn TerrainModel>,
}

impl SurfaceModel {
    pub fn builder() -> SurfaceModelBuilder {
        SurfaceModelBuilder::new()
    }

    /// WGS84 ellipsoid with no terrain.
    pub fn wgs84() -> Self {
        Self::builder().build()
    }

    pub fn ellipsoid(&self) -> Ellipsoid {
        self.ellipsoid
    }

    /// Radius of the surface in µm at the given position.
    pub fn surface_radius_um(&self, lat_microdeg: i64, lon_microdeg: i64) -> u64 {
        let base = self.ellipsoid.radius_at_lat(lat_microdeg);
        let offset = self.terrain.offset_um(lat_microdeg, lon_microdeg);
        base.saturating_add_signed(offset)
    }

    /// True when a point at `r_um` lies on or below the surface.
    pub fn is_inside(&self, r_um: u64, lat_microdeg: i64, lon_microdeg: i64) -> bool {
        r_um <= self.surface_radius_um(lat_microdeg, lon_microdeg)
    }

    pub fn contains(&self, id: &UVoxId) -> bool {
        let (r_um, lat_microdeg, lon_microdeg) = decode_uvoxid(id);
        self.is_inside(r_um, lat_microdeg, lon_microdeg)
    }

    /// The voxel on the surface at a `(lon, lat)` position in degrees.
    pub fn voxel_at(&self, coord: &impl Coordinate) -> Voxel {
        let lat_microdeg = degrees_to_microdeg(coord.lat_deg());
        let lon_microdeg = degrees_to_microdeg(coord.lon_deg());
        Voxel::new(
            self.surface_radius_um(lat_microdeg, lon_microdeg),
            lat_microdeg,
            lon_microdeg,
        )
    }
}

impl Default for SurfaceModel {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl fmt::Debug for SurfaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceModel")
            .field("ellipsoid", &self.ellipsoid)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct SurfaceModelBuilder {
    ellipsoid: Option<Ellipsoid>,
    terrain: Option<Box<dyn TerrainModel>>,
}

impl SurfaceModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ellipsoid(mut self, ellipsoid: Ellipsoid) -> Self {
        self.ellipsoid = Some(ellipsoid);
        self
    }

    pub fn terrain(mut self, terrain: impl TerrainModel + 'static) -> Self {
        self.terrain = Some(Box::new(terrain));
        self
    }

    /// Unset parts default to WGS84 and [`FlatTerrain`].
    pub fn build(self) -> SurfaceModel {
        SurfaceModel {
            ellipsoid: self.ellipsoid.unwrap_or_default(),
            terrain: self.terrain.unwrap_or_else(|| Box::new(FlatTerrain)),
        }
    }
}

/// Whether a point lies inside Earth's WGS84 ellipsoid (no terrain).
pub fn is_inside_earth(r_um: u64, lat_microdeg: i64, lon_microdeg: i64) -> bool {
    SurfaceModel::wgs84().is_inside(r_um, lat_microdeg, lon_microdeg)
}
