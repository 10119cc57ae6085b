//! World services consumed by the planner.
//!
//! The planner never owns geometry. It reads three services through traits:
//!
//! - [`RegionService`] / [`Region`]: which region a point belongs to, region
//!   centers, region adjacency
//! - [`TerrainSampler`]: ground height under a point
//! - [`ObstacleQuery`]: sphere-vs-obstacle queries
//!
//! [`World`] bundles them behind `Arc`s so a router can hand the same world to
//! many concurrent searches. All services are queried read-only.
//!
//! Small reference implementations live in the submodules: [`RegionMap`] with
//! [`BoxRegion`] / [`DynamicBoxRegion`], [`FlatTerrain`] / [`HeightGrid`] and
//! [`ObstacleSet`].

mod obstacles;
mod region;
mod terrain;

pub use obstacles::{Obstacle, ObstacleSet};
pub use region::{BoxRegion, DynamicBoxRegion, RegionMap};
pub use terrain::{FlatTerrain, HeightGrid};

use std::sync::Arc;

use crate::core::{PathNode, Vec3};
use crate::error::WorldError;

/// A bounded subdivision of the world.
///
/// Static and dynamic regions share this contract; a dynamic region reports
/// `is_dynamic() == true` and may change geometry between searches.
pub trait Region: Send + Sync {
    /// Check if a position lies in this region.
    fn contains(&self, position: Vec3) -> bool;

    /// Representative point used as a routing target.
    fn center(&self) -> Vec3;

    /// Whether the geometry can change over time.
    fn is_dynamic(&self) -> bool {
        false
    }

    /// Adjust successors generated from a state inside this region.
    ///
    /// Only called for dynamic regions, before the states are checked for
    /// feasibility, so moved states are re-resolved. The default leaves the states
    /// untouched, which treats the region as static for that expansion.
    fn transform_successors(&self, _parent: &PathNode, _children: &mut [PathNode]) {}
}

/// Shared handle, so a caller can keep moving a dynamic region after handing
/// it to a region collection.
impl<R: Region + ?Sized> Region for Arc<R> {
    fn contains(&self, position: Vec3) -> bool {
        (**self).contains(position)
    }

    fn center(&self) -> Vec3 {
        (**self).center()
    }

    fn is_dynamic(&self) -> bool {
        (**self).is_dynamic()
    }

    fn transform_successors(&self, parent: &PathNode, children: &mut [PathNode]) {
        (**self).transform_successors(parent, children)
    }
}

/// Ordered, index-addressable region collection with adjacency.
pub trait RegionService: Send + Sync {
    /// Number of regions. Valid indices are `0..region_count()`.
    fn region_count(&self) -> usize;

    /// Region at `index`.
    fn region(&self, index: usize) -> Option<&dyn Region>;

    /// Index of the region owning `position`, if any.
    fn region_of(&self, position: Vec3) -> Option<usize>;

    /// Regions directly reachable from `index`.
    fn neighbours(&self, index: usize) -> &[usize];
}

/// Ground height provider.
pub trait TerrainSampler: Send + Sync {
    /// Height of the walkable surface below (x, z).
    fn sample_height(&self, x: f32, z: f32) -> Result<f32, WorldError>;
}

/// Obstacle collision queries.
pub trait ObstacleQuery: Send + Sync {
    /// Check if a sphere at `center` touches an obstacle on any layer in
    /// `layer_mask`.
    fn collides_at(&self, center: Vec3, radius: f32, layer_mask: u32) -> Result<bool, WorldError>;
}

/// Injected world services shared by every search.
#[derive(Clone)]
pub struct World {
    pub regions: Arc<dyn RegionService>,
    pub terrain: Arc<dyn TerrainSampler>,
    pub obstacles: Arc<dyn ObstacleQuery>,
}

impl World {
    pub fn new(
        regions: Arc<dyn RegionService>,
        terrain: Arc<dyn TerrainSampler>,
        obstacles: Arc<dyn ObstacleQuery>,
    ) -> Self {
        Self {
            regions,
            terrain,
            obstacles,
        }
    }

    /// Resolve the region of a state: cached index first, then a lookup.
    pub fn resolve_region(&self, node: &PathNode) -> Option<usize> {
        if let Some(cached) = node.region
            && let Some(region) = self.regions.region(cached)
            && region.contains(node.position)
        {
            return Some(cached);
        }
        self.regions.region_of(node.position)
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("regions", &self.regions.region_count())
            .finish_non_exhaustive()
    }
}
