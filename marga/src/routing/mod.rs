//! Region-level routing.
//!
//! [`RegionGraph`] finds the cheapest region sequence over the adjacency
//! declared by the region service. [`Router`] is the public planning entry
//! point: it picks the single-region or cross-region goal test, runs the local
//! planner and delivers the [`PathResult`](crate::planner::PathResult) through
//! a callback or a [`RouteTicket`].

mod graph;
mod router;

pub use graph::RegionGraph;
pub use router::{RouteTicket, Router};
