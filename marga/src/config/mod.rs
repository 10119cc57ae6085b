//! Unified configuration loading for marga.
//!
//! Loads all configuration from a single YAML file with defaults for every
//! field.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marga::config::MargaConfig;
//!
//! // Load from default path (configs/marga.yaml), falling back to defaults
//! let config = MargaConfig::load_default()?;
//!
//! let router = Router::new(world, config.planner.clone());
//! router.route(start, goal, &config.motion, |result| { /* ... */ })?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`MovementProperties`] | Speed, time step, turn rate, discretization |
//! | [`PlannerSettings`] | Expansion budget, surface band, clearance radius, modes |
//!
//! ## Example YAML
//!
//! ```yaml
//! motion:
//!   max_speed: 1.0        # m/s
//!   delta_time: 1.0       # s per step
//!   rotation_angle: 0.39  # rad per angle step
//!   angle_steps: 2        # headings per side
//!   delta_dist: 0.5       # visited grid bucket (m)
//!   epsilon: 0.5          # goal tolerance (m)
//!
//! planner:
//!   max_expansions: 100000
//!   surface_min: 0.0
//!   surface_max: 2.0
//!   obstacle_clearance_radius: 1.0
//!   heuristic: elapsed_time   # or admissible
//!   routing: next_hop         # or complete
//!   dispatch: worker          # or inline
//! ```

mod defaults;
mod error;
mod marga;
mod motion;
mod planner;

pub use error::ConfigLoadError;
pub use marga::MargaConfig;
pub use motion::MovementProperties;
pub use planner::{Dispatch, HeuristicMode, PlannerSettings, RoutingMode};
