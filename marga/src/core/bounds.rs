//! Axis-aligned bounding box.
//!
//! [`Aabb`] is the shape behind the reference region and obstacle
//! implementations:
//! - Region containment (is a point inside a region box)
//! - Obstacle probing (does a sphere touch an obstacle box)
//!
//! ```rust
//! use marga::core::{Aabb, Vec3};
//!
//! let room = Aabb::new(Vec3::new(-5.0, -1.0, -5.0), Vec3::new(5.0, 3.0, 5.0));
//! assert!(room.contains(Vec3::new(0.0, 0.0, 4.0)));
//! assert_eq!(room.center(), Vec3::new(0.0, 1.0, 0.0));
//! ```

use serde::{Deserialize, Serialize};

use super::point::Vec3;

/// Axis-aligned bounding box in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner (smallest x, y and z values).
    pub min: Vec3,
    /// Maximum corner (largest x, y and z values).
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from min and max corners.
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box from a center and half extents.
    #[inline]
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Check if a point lies inside (boundary inclusive).
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Closest point of the box to `p`.
    #[inline]
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
            p.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Check if a sphere overlaps the box.
    ///
    /// A sphere that only touches a face does not count as overlapping.
    #[inline]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.closest_point(center).distance_squared(&center) < radius * radius
    }

    /// Box shifted by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Aabb {
        Aabb::new(self.min + offset, self.max + offset)
    }
}
