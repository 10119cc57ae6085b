//! Test utilities for marga.
//!
//! World builders shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use marga::core::Aabb;
use marga::world::{BoxRegion, FlatTerrain, HeightGrid, ObstacleSet, RegionMap};
use marga::{PathNode, Vec3, World};

/// Route `log` output to the test harness; safe to call from every test.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Axis-aligned room spanning [x0, x1] × [z0, z1], 4 m tall.
pub fn room(x0: f32, z0: f32, x1: f32, z1: f32) -> BoxRegion {
    BoxRegion::new(Aabb::new(Vec3::new(x0, -1.0, z0), Vec3::new(x1, 3.0, z1)))
}

/// Full-height wall box over [x0, x1] × [z0, z1].
pub fn wall(x0: f32, z0: f32, x1: f32, z1: f32) -> Aabb {
    Aabb::new(Vec3::new(x0, -1.0, z0), Vec3::new(x1, 3.0, z1))
}

/// One 20 × 20 room on flat ground.
pub fn open_world(obstacles: ObstacleSet) -> World {
    let regions = RegionMap::new().with_region(room(-10.0, -10.0, 10.0, 10.0));
    World::new(
        Arc::new(regions),
        Arc::new(FlatTerrain::new(0.0)),
        Arc::new(obstacles),
    )
}

/// One room over a height grid.
pub fn terrain_world(terrain: HeightGrid) -> World {
    let regions = RegionMap::new().with_region(room(-10.0, -10.0, 10.0, 10.0));
    World::new(
        Arc::new(regions),
        Arc::new(terrain),
        Arc::new(ObstacleSet::new()),
    )
}

/// `count` rooms of `length` meters chained along +Z, linked in order.
pub fn corridor(count: usize, length: f32) -> World {
    let mut regions = RegionMap::new();
    for i in 0..count {
        let z0 = i as f32 * length - 2.0;
        regions.add(room(-3.0, z0, 3.0, z0 + length));
        if i > 0 {
            regions.connect(i - 1, i);
        }
    }
    World::new(
        Arc::new(regions),
        Arc::new(FlatTerrain::new(0.0)),
        Arc::new(ObstacleSet::new()),
    )
}

/// Two rooms far apart with no link between them.
pub fn disjoint_rooms() -> World {
    let regions = RegionMap::new()
        .with_region(room(-5.0, -5.0, 5.0, 5.0))
        .with_region(room(20.0, -5.0, 30.0, 5.0));
    World::new(
        Arc::new(regions),
        Arc::new(FlatTerrain::new(0.0)),
        Arc::new(ObstacleSet::new()),
    )
}

/// Origin, facing +Z.
pub fn origin() -> PathNode {
    PathNode::new(Vec3::ZERO, Vec3::FORWARD)
}

pub fn goal(x: f32, z: f32) -> PathNode {
    PathNode::at(Vec3::new(x, 0.0, z))
}
