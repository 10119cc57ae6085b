//! Core types for the marga planner.
//!
//! - [`Vec3`]: world-space vector (Y up)
//! - [`Aabb`]: axis-aligned box used by the reference regions and obstacles
//! - [`PathNode`]: kinematic search state, with [`NodeId`] and [`GridKey`]
//! - [`math`]: angle helpers

mod bounds;
mod node;
mod point;

pub mod math;

pub use bounds::Aabb;
pub use node::{GridKey, NodeId, PathNode};
pub use point::Vec3;
