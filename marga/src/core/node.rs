//! Kinematic search state.

use serde::{Deserialize, Serialize};

use super::point::Vec3;

/// Index of a node inside the search tree that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Coarse 4D bucket (x, y, z, time) used to deduplicate continuous states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridKey {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub t: i32,
}

/// Agent pose at a moment in time.
///
/// A node is a value: successors are built with [`PathNode::spawn_child`] and
/// the resolved region is written through [`PathNode::with_region`], never in
/// place by the search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    /// Position in world frame
    pub position: Vec3,
    /// Horizontal unit heading
    pub direction: Vec3,
    /// Elapsed time since the search start (seconds)
    pub time_moment: f32,
    /// Cumulative travelled distance (meters)
    pub path_length: f32,
    /// Predecessor in the search tree, `None` for the first state
    #[serde(skip)]
    pub parent: Option<NodeId>,
    /// Resolved region index, `None` while unresolved
    pub region: Option<usize>,
}

impl PathNode {
    /// Create a root state with zero elapsed time.
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction: direction.horizontal().normalize(),
            time_moment: 0.0,
            path_length: 0.0,
            parent: None,
            region: None,
        }
    }

    /// Create a target state that only carries a position.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }

    /// Copy of this node with the region cache set.
    pub fn with_region(mut self, region: usize) -> Self {
        self.region = Some(region);
        self
    }

    /// Euclidean distance between the two positions.
    #[inline]
    pub fn distance(&self, other: &PathNode) -> f32 {
        self.position.distance(&other.position)
    }

    /// Build a successor state.
    ///
    /// The heading is turned by `rotation` radians about Y, then the position
    /// advances `step` meters along the new heading. Time always advances by
    /// `delta_time`, also when `step` is zero. The region hint is inherited so
    /// the oracle can try the cheap containment test first. The parent link is
    /// left empty; the search tree sets it when the node is stored.
    pub fn spawn_child(&self, step: f32, rotation: f32, delta_time: f32) -> PathNode {
        let direction = self.direction.rotate_y(rotation);
        PathNode {
            position: self.position + direction * step,
            direction,
            time_moment: self.time_moment + delta_time,
            path_length: self.path_length + step,
            parent: None,
            region: self.region,
        }
    }

    /// Discretize into the 4D visited key.
    pub fn to_grid_key(&self, delta_dist: f32, delta_time: f32) -> GridKey {
        GridKey {
            x: (self.position.x / delta_dist).floor() as i32,
            y: (self.position.y / delta_dist).floor() as i32,
            z: (self.position.z / delta_dist).floor() as i32,
            t: (self.time_moment / delta_time).floor() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_spawn_forward() {
        let root = PathNode::new(Vec3::ZERO, Vec3::FORWARD);
        let child = root.spawn_child(1.5, 0.0, 0.5);
        assert_eq!(child.position, Vec3::new(0.0, 0.0, 1.5));
        assert_eq!(child.time_moment, 0.5);
        assert_eq!(child.path_length, 1.5);
        assert!(child.parent.is_none());
    }

    #[test]
    fn test_spawn_turn_in_place() {
        let root = PathNode::new(Vec3::ZERO, Vec3::FORWARD).with_region(3);
        let child = root.spawn_child(0.0, FRAC_PI_2, 1.0);
        assert_eq!(child.position, Vec3::ZERO);
        assert_relative_eq!(child.direction.x, 1.0, epsilon = 1e-6);
        assert_eq!(child.time_moment, 1.0);
        assert_eq!(child.path_length, 0.0);
        assert_eq!(child.region, Some(3));
    }

    #[test]
    fn test_direction_flattened() {
        let node = PathNode::new(Vec3::ZERO, Vec3::new(0.0, 5.0, 2.0));
        assert_eq!(node.direction, Vec3::FORWARD);
    }

    #[test]
    fn test_grid_key_negative_coordinates() {
        let mut node = PathNode::at(Vec3::new(-0.1, 0.0, 0.9));
        node.time_moment = 2.0;
        let key = node.to_grid_key(0.5, 1.0);
        assert_eq!(key, GridKey { x: -1, y: 0, z: 1, t: 2 });
    }
}
