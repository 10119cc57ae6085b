//! Static obstacle set.

use crate::core::{Aabb, Vec3};
use crate::error::WorldError;

use super::ObstacleQuery;

/// Solid box on a collision layer.
#[derive(Clone, Copy, Debug)]
pub struct Obstacle {
    pub bounds: Aabb,
    /// Bit flags; a sphere hits the obstacle when `layer & mask != 0`.
    pub layer: u32,
}

/// Linear-scan obstacle collection.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a box on layer 1.
    pub fn add_box(&mut self, bounds: Aabb) {
        self.add(Obstacle { bounds, layer: 1 });
    }

    pub fn add(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Builder-style [`ObstacleSet::add_box`].
    pub fn with_box(mut self, bounds: Aabb) -> Self {
        self.add_box(bounds);
        self
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl ObstacleQuery for ObstacleSet {
    fn collides_at(&self, center: Vec3, radius: f32, layer_mask: u32) -> Result<bool, WorldError> {
        Ok(self
            .obstacles
            .iter()
            .filter(|o| o.layer & layer_mask != 0)
            .any(|o| o.bounds.intersects_sphere(center, radius)))
    }
}
