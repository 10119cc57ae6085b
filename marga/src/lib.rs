//! # Marga: Kinematic Motion Planning with Region Routing
//!
//! Plans time-stamped paths for an agent moving at bounded speed and turn rate
//! through a world split into regions, over terrain, around obstacles.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use marga::{MovementProperties, PathNode, PlannerSettings, Router, Vec3, World};
//! use marga::core::Aabb;
//! use marga::world::{BoxRegion, FlatTerrain, ObstacleSet, RegionMap};
//!
//! let regions = RegionMap::new().with_region(BoxRegion::new(Aabb::new(
//!     Vec3::new(-10.0, -1.0, -10.0),
//!     Vec3::new(10.0, 3.0, 10.0),
//! )));
//! let world = World::new(
//!     Arc::new(regions),
//!     Arc::new(FlatTerrain::new(0.0)),
//!     Arc::new(ObstacleSet::new()),
//! );
//!
//! let router = Router::new(world, PlannerSettings::default());
//! let start = PathNode::new(Vec3::ZERO, Vec3::FORWARD);
//! let goal = PathNode::at(Vec3::new(0.0, 0.0, 5.0));
//! router.route(start, goal, &MovementProperties::default(), |result| {
//!     println!("success={} states={}", result.success, result.len());
//! })?;
//! # Ok::<(), marga::MargaError>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! - **Y-up**: height is Y, the ground plane is X/Z
//! - **Headings** are horizontal unit vectors, turned about Y
//! - **Time** is seconds since the start of the search
//!
//! ## Architecture
//!
//! - [`core`]: Vec3, Aabb, PathNode
//! - [`config`]: Motion profile and planner settings, YAML loading
//! - [`world`]: Region, terrain and obstacle service traits with simple implementations
//! - [`planner`]: Feasibility oracle, successors, heuristic, best-first search
//! - [`routing`]: Region graph and the callback-driven router
//! - [`error`]: Error types

pub mod config;
pub mod core;
pub mod error;
pub mod planner;
pub mod routing;
pub mod world;

pub use config::{
    Dispatch, HeuristicMode, MargaConfig, MovementProperties, PlannerSettings, RoutingMode,
};
pub use core::{PathNode, Vec3};
pub use error::{ConfigError, MargaError, Result, WorldError};
pub use planner::{PathFailure, PathResult, Rejection};
pub use routing::{RouteTicket, Router};
pub use world::World;
