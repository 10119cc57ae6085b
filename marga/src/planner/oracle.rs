//! Feasibility checks for candidate states.

use log::warn;

use crate::config::PlannerSettings;
use crate::core::PathNode;
use crate::world::World;

use super::types::Rejection;

/// Outcome of [`FeasibilityOracle::try_resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// State is usable and lies in `region`
    Feasible { region: usize },
    Infeasible(Rejection),
}

impl Resolution {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Resolution::Feasible { .. })
    }
}

/// Wraps the world services into a single feasibility predicate.
///
/// Checks, in order:
/// 1. Region membership (cached region first, then a lookup)
/// 2. Height above the terrain within `[surface_min, surface_max]`
/// 3. Obstacle check, only for states that have a predecessor
///
/// The oracle never mutates the node; the caller stores the resolved region.
/// A failing terrain or obstacle service marks only the queried state as
/// infeasible.
#[derive(Clone, Copy)]
pub struct FeasibilityOracle<'a> {
    world: &'a World,
    settings: &'a PlannerSettings,
}

impl<'a> FeasibilityOracle<'a> {
    pub fn new(world: &'a World, settings: &'a PlannerSettings) -> Self {
        Self { world, settings }
    }

    pub fn world(&self) -> &'a World {
        self.world
    }

    pub fn try_resolve(&self, node: &PathNode) -> Resolution {
        let Some(region) = self.world.resolve_region(node) else {
            return Resolution::Infeasible(Rejection::OutsideRegions);
        };

        let p = node.position;
        let ground = match self.world.terrain.sample_height(p.x, p.z) {
            Ok(h) => h,
            Err(e) => {
                warn!("[Oracle] terrain query failed at ({:.2},{:.2}): {}", p.x, p.z, e);
                return Resolution::Infeasible(Rejection::ServiceUnavailable);
            }
        };

        let offset = p.y - ground;
        if !offset.is_finite() {
            warn!("[Oracle] terrain height at ({:.2},{:.2}) is not finite", p.x, p.z);
            return Resolution::Infeasible(Rejection::ServiceUnavailable);
        }
        if offset < self.settings.surface_min {
            return Resolution::Infeasible(Rejection::BelowSurface);
        }
        if offset > self.settings.surface_max {
            return Resolution::Infeasible(Rejection::AboveSurface);
        }

        // The first state is the agent's current position and is trusted
        if node.parent.is_some() {
            match self.world.obstacles.collides_at(
                p,
                self.settings.obstacle_clearance_radius,
                self.settings.obstacle_layer_mask,
            ) {
                Ok(false) => {}
                Ok(true) => return Resolution::Infeasible(Rejection::Obstructed),
                Err(e) => {
                    warn!(
                        "[Oracle] obstacle query failed at ({:.2},{:.2},{:.2}): {}",
                        p.x, p.y, p.z, e
                    );
                    return Resolution::Infeasible(Rejection::ServiceUnavailable);
                }
            }
        }

        Resolution::Feasible { region }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Aabb, NodeId, Vec3};
    use crate::error::WorldError;
    use crate::world::{
        BoxRegion, FlatTerrain, ObstacleQuery, ObstacleSet, RegionMap, TerrainSampler,
    };
    use std::sync::Arc;

    struct BrokenObstacles;

    impl ObstacleQuery for BrokenObstacles {
        fn collides_at(&self, _: Vec3, _: f32, _: u32) -> Result<bool, WorldError> {
            Err(WorldError::Unavailable("physics offline".into()))
        }
    }

    fn two_rooms() -> RegionMap {
        RegionMap::new()
            .with_region(BoxRegion::new(Aabb::new(
                Vec3::new(-10.0, -5.0, -10.0),
                Vec3::new(0.0, 5.0, 10.0),
            )))
            .with_region(BoxRegion::new(Aabb::new(
                Vec3::new(0.0, -5.0, -10.0),
                Vec3::new(10.0, 5.0, 10.0),
            )))
    }

    fn world_with(obstacles: Arc<dyn ObstacleQuery>) -> World {
        World::new(Arc::new(two_rooms()), Arc::new(FlatTerrain::new(0.0)), obstacles)
    }

    fn child_at(position: Vec3) -> PathNode {
        let mut node = PathNode::at(position);
        node.parent = Some(NodeId(0));
        node
    }

    #[test]
    fn test_resolves_region() {
        let world = world_with(Arc::new(ObstacleSet::new()));
        let settings = PlannerSettings::default();
        let oracle = FeasibilityOracle::new(&world, &settings);

        assert_eq!(
            oracle.try_resolve(&PathNode::at(Vec3::new(5.0, 0.0, 0.0))),
            Resolution::Feasible { region: 1 }
        );
        assert_eq!(
            oracle.try_resolve(&PathNode::at(Vec3::new(50.0, 0.0, 0.0))),
            Resolution::Infeasible(Rejection::OutsideRegions)
        );
    }

    #[test]
    fn test_stale_region_cache_is_revalidated() {
        let world = world_with(Arc::new(ObstacleSet::new()));
        let settings = PlannerSettings::default();
        let oracle = FeasibilityOracle::new(&world, &settings);

        let stale = PathNode::at(Vec3::new(-5.0, 0.0, 0.0)).with_region(1);
        assert_eq!(
            oracle.try_resolve(&stale),
            Resolution::Feasible { region: 0 }
        );

        let out_of_range = PathNode::at(Vec3::new(5.0, 0.0, 0.0)).with_region(42);
        assert_eq!(
            oracle.try_resolve(&out_of_range),
            Resolution::Feasible { region: 1 }
        );
    }

    #[test]
    fn test_surface_band() {
        let world = world_with(Arc::new(ObstacleSet::new()));
        let settings = PlannerSettings::default();
        let oracle = FeasibilityOracle::new(&world, &settings);

        assert!(oracle.try_resolve(&PathNode::at(Vec3::new(1.0, 2.0, 0.0))).is_feasible());
        assert_eq!(
            oracle.try_resolve(&PathNode::at(Vec3::new(1.0, 2.5, 0.0))),
            Resolution::Infeasible(Rejection::AboveSurface)
        );
        assert_eq!(
            oracle.try_resolve(&PathNode::at(Vec3::new(1.0, -0.1, 0.0))),
            Resolution::Infeasible(Rejection::BelowSurface)
        );
    }

    struct NanTerrain;

    impl TerrainSampler for NanTerrain {
        fn sample_height(&self, _: f32, _: f32) -> Result<f32, WorldError> {
            Ok(f32::NAN)
        }
    }

    #[test]
    fn test_non_finite_terrain_height_rejected() {
        let world = World::new(
            Arc::new(two_rooms()),
            Arc::new(NanTerrain),
            Arc::new(ObstacleSet::new()),
        );
        let settings = PlannerSettings::default();
        let oracle = FeasibilityOracle::new(&world, &settings);

        assert_eq!(
            oracle.try_resolve(&PathNode::at(Vec3::new(1.0, 0.5, 0.0))),
            Resolution::Infeasible(Rejection::ServiceUnavailable)
        );
    }

    #[test]
    fn test_obstacle_check_skipped_for_root() {
        let obstacles =
            ObstacleSet::new().with_box(Aabb::from_center(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0)));
        let world = world_with(Arc::new(obstacles));
        let settings = PlannerSettings::default();
        let oracle = FeasibilityOracle::new(&world, &settings);

        let position = Vec3::new(-0.5, 0.0, 0.0);
        assert!(oracle.try_resolve(&PathNode::at(position)).is_feasible());
        assert_eq!(
            oracle.try_resolve(&child_at(position)),
            Resolution::Infeasible(Rejection::Obstructed)
        );
    }

    #[test]
    fn test_service_failure_marks_state_infeasible() {
        let world = world_with(Arc::new(BrokenObstacles));
        let settings = PlannerSettings::default();
        let oracle = FeasibilityOracle::new(&world, &settings);

        assert_eq!(
            oracle.try_resolve(&child_at(Vec3::new(-2.0, 0.0, 0.0))),
            Resolution::Infeasible(Rejection::ServiceUnavailable)
        );
    }
}
