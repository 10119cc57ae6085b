//! Successor generation over the discretized action set.

use log::trace;

use crate::config::MovementProperties;
use crate::core::{NodeId, PathNode};

use super::oracle::{FeasibilityOracle, Resolution};

/// Produces feasible next states from a state and a motion profile.
///
/// The action set is {stay, one forward step} × headings
/// `-angle_steps..=angle_steps` (scaled by `rotation_angle`), giving at most
/// `2 · (2 · angle_steps + 1)` candidates per expansion.
#[derive(Clone, Copy)]
pub struct SuccessorGenerator<'a> {
    oracle: FeasibilityOracle<'a>,
}

impl<'a> SuccessorGenerator<'a> {
    pub fn new(oracle: FeasibilityOracle<'a>) -> Self {
        Self { oracle }
    }

    /// Feasible successors of `node`, which is stored in the search tree as
    /// `node_id`. Each returned child links back to `node_id` and carries its
    /// resolved region. A dynamic parent region transforms the candidates
    /// first; the transformed states are what the oracle checks.
    pub fn expand(
        &self,
        node: &PathNode,
        node_id: NodeId,
        profile: &MovementProperties,
    ) -> Vec<PathNode> {
        let step = profile.step_length();
        let steps = profile.angle_steps as i32;
        let mut candidates = Vec::with_capacity(profile.branching_factor());

        for mult in 0..=1 {
            for angle_step in -steps..=steps {
                let mut next = node.spawn_child(
                    step * mult as f32,
                    angle_step as f32 * profile.rotation_angle,
                    profile.delta_time,
                );
                next.parent = Some(node_id);
                candidates.push(next);
            }
        }

        // Dynamic regions adjust candidates before they are checked
        let regions = &self.oracle.world().regions;
        if let Some(index) = node.region
            && let Some(region) = regions.region(index)
            && region.is_dynamic()
        {
            trace!(
                "[Successors] applying dynamic region {} transform to {} states",
                index,
                candidates.len()
            );
            region.transform_successors(node, &mut candidates);
        }

        candidates
            .into_iter()
            .filter_map(|next| match self.oracle.try_resolve(&next) {
                Resolution::Feasible { region } => Some(next.with_region(region)),
                Resolution::Infeasible(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerSettings;
    use crate::core::{Aabb, Vec3};
    use crate::world::{
        BoxRegion, DynamicBoxRegion, FlatTerrain, ObstacleSet, Region, RegionMap, World,
    };
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn open_world() -> World {
        let regions = RegionMap::new().with_region(BoxRegion::new(Aabb::new(
            Vec3::new(-20.0, -1.0, -20.0),
            Vec3::new(20.0, 3.0, 20.0),
        )));
        World::new(
            Arc::new(regions),
            Arc::new(FlatTerrain::new(0.0)),
            Arc::new(ObstacleSet::new()),
        )
    }

    #[test]
    fn test_full_branching_in_open_space() {
        let world = open_world();
        let settings = PlannerSettings::default();
        let generator = SuccessorGenerator::new(FeasibilityOracle::new(&world, &settings));
        let profile = MovementProperties::default().with_rotation(0.3, 2);

        let root = PathNode::new(Vec3::ZERO, Vec3::FORWARD).with_region(0);
        let children = generator.expand(&root, NodeId(0), &profile);

        assert_eq!(children.len(), 10);
        for child in &children {
            assert_eq!(child.parent, Some(NodeId(0)));
            assert_eq!(child.region, Some(0));
            assert_eq!(child.time_moment, profile.delta_time);
        }

        // First half stays in place, second half moves one step
        assert!(children[..5].iter().all(|c| c.position == Vec3::ZERO));
        for c in &children[5..] {
            assert_relative_eq!(c.position.length(), 1.0, epsilon = 1e-5);
            assert_eq!(c.path_length, 1.0);
        }

        // Straight ahead sits in the middle of each half
        assert_eq!(children[7].position, Vec3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(children[5].direction.x, -(0.6f32).sin(), epsilon = 1e-5);
    }

    #[test]
    fn test_infeasible_children_dropped() {
        let world = open_world();
        let settings = PlannerSettings::default();
        let generator = SuccessorGenerator::new(FeasibilityOracle::new(&world, &settings));
        let profile = MovementProperties::default().with_rotation(0.3, 1);

        // Facing the region edge: forward steps leave the region
        let root = PathNode::new(Vec3::new(0.0, 0.0, 19.5), Vec3::FORWARD).with_region(0);
        let children = generator.expand(&root, NodeId(3), &profile);

        assert_eq!(children.len(), 3);
        assert!(children.iter().all(|c| c.path_length == 0.0));
    }

    struct Lift {
        inner: DynamicBoxRegion,
        lift: f32,
    }

    impl Region for Lift {
        fn contains(&self, position: Vec3) -> bool {
            self.inner.contains(position)
        }

        fn center(&self) -> Vec3 {
            self.inner.center()
        }

        fn is_dynamic(&self) -> bool {
            true
        }

        fn transform_successors(&self, _parent: &PathNode, children: &mut [PathNode]) {
            for child in children {
                child.position.y += self.lift;
            }
        }
    }

    #[test]
    fn test_dynamic_region_hook_applied() {
        let regions = RegionMap::new().with_region(Lift {
            inner: DynamicBoxRegion::new(Aabb::new(
                Vec3::new(-5.0, -1.0, -5.0),
                Vec3::new(5.0, 3.0, 5.0),
            )),
            lift: 0.5,
        });
        let world = World::new(
            Arc::new(regions),
            Arc::new(FlatTerrain::new(0.0)),
            Arc::new(ObstacleSet::new()),
        );
        let settings = PlannerSettings::default();
        let generator = SuccessorGenerator::new(FeasibilityOracle::new(&world, &settings));
        let profile = MovementProperties::default().with_rotation(0.3, 0);

        let root = PathNode::new(Vec3::ZERO, Vec3::FORWARD).with_region(0);
        let children = generator.expand(&root, NodeId(0), &profile);

        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.position.y == 0.5));
    }

    #[test]
    fn test_dynamic_region_hook_output_rechecked() {
        let regions = RegionMap::new()
            .with_region(Lift {
                inner: DynamicBoxRegion::new(Aabb::new(
                    Vec3::new(-5.0, -1.0, -5.0),
                    Vec3::new(5.0, 10.0, 5.0),
                )),
                lift: 5.0,
            })
            .with_region(BoxRegion::new(Aabb::new(
                Vec3::new(-5.0, -1.0, 5.0),
                Vec3::new(5.0, 10.0, 15.0),
            )));
        let world = World::new(
            Arc::new(regions),
            Arc::new(FlatTerrain::new(0.0)),
            Arc::new(ObstacleSet::new()),
        );
        let settings = PlannerSettings::default();
        let oracle = FeasibilityOracle::new(&world, &settings);
        let generator = SuccessorGenerator::new(oracle);
        let profile = MovementProperties::default().with_rotation(0.3, 1);

        // Lifted 5 m above flat ground, every candidate leaves the surface band
        let root = PathNode::new(Vec3::ZERO, Vec3::FORWARD).with_region(0);
        let children = generator.expand(&root, NodeId(0), &profile);
        assert!(children.is_empty());

        // Near the boundary the lifted candidates stay feasible, and the
        // forward step is re-resolved into the neighbouring region
        let settings = PlannerSettings {
            surface_max: 6.0,
            ..PlannerSettings::default()
        };
        let oracle = FeasibilityOracle::new(&world, &settings);
        let generator = SuccessorGenerator::new(oracle);
        let root = PathNode::new(Vec3::new(0.0, 0.0, 4.5), Vec3::FORWARD).with_region(0);
        let children = generator.expand(&root, NodeId(0), &profile);

        assert_eq!(children.len(), 6);
        for child in &children {
            assert_eq!(child.position.y, 5.0);
            assert_eq!(
                oracle.try_resolve(child),
                Resolution::Feasible {
                    region: child.region.unwrap()
                }
            );
        }
        let ahead = &children[4];
        assert_eq!(ahead.position, Vec3::new(0.0, 5.0, 5.5));
        assert_eq!(ahead.region, Some(1));
    }

    #[test]
    fn test_default_dynamic_hook_is_identity() {
        let regions = RegionMap::new().with_region(DynamicBoxRegion::new(Aabb::new(
            Vec3::new(-5.0, -1.0, -5.0),
            Vec3::new(5.0, 3.0, 5.0),
        )));
        let world = World::new(
            Arc::new(regions),
            Arc::new(FlatTerrain::new(0.0)),
            Arc::new(ObstacleSet::new()),
        );
        let settings = PlannerSettings::default();
        let generator = SuccessorGenerator::new(FeasibilityOracle::new(&world, &settings));
        let profile = MovementProperties::default().with_rotation(0.3, 0);

        let root = PathNode::new(Vec3::ZERO, Vec3::FORWARD).with_region(0);
        let children = generator.expand(&root, NodeId(0), &profile);

        assert_eq!(children.len(), 2);
        assert_eq!(children[1].position, Vec3::new(0.0, 0.0, 1.0));
    }
}
