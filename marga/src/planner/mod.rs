//! Local motion planning.
//!
//! Best-first search over continuous, time-stamped kinematic states:
//!
//! - [`FeasibilityOracle`]: region, surface and obstacle checks per state
//! - [`SuccessorGenerator`]: stay / step forward at discrete headings
//! - [`estimate`]: cost-to-go heuristic
//! - [`LocalPlanner`]: the search itself, with a caller-supplied goal test
//!
//! States are deduplicated on a coarse 4D grid (position quantized by
//! `delta_dist`, time by `delta_time`); the first state to claim a bucket
//! keeps it.
//!
//! ```rust,ignore
//! use marga::planner::LocalPlanner;
//!
//! let planner = LocalPlanner::new(&world, &settings);
//! let result = planner.search(&start, &goal, &profile, |cur, goal| {
//!     cur.distance(goal) <= profile.epsilon
//! });
//! if result.success {
//!     println!("Path found with {} states", result.len());
//! }
//! ```

mod heuristic;
mod oracle;
mod search;
mod successors;
mod types;

pub use heuristic::estimate;
pub use oracle::{FeasibilityOracle, Resolution};
pub use search::LocalPlanner;
pub use successors::SuccessorGenerator;
pub use types::{PathFailure, PathResult, Rejection};
