//! Planner settings section.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, require_positive};

use super::defaults;

/// Cost-to-go estimate used to order the frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicMode {
    /// Heading error + twice the travel time left + elapsed time.
    /// Favours the soonest arrival; not admissible.
    #[default]
    ElapsedTime,
    /// Straight-line travel time left at full speed.
    Admissible,
}

/// How much of a cross-region route a single request plans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingMode {
    /// Plan only until the next region on the route is entered.
    #[default]
    NextHop,
    /// Chain region legs up to the goal itself.
    Complete,
}

/// Where routing runs and the result callback fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dispatch {
    /// On a dedicated worker thread per request.
    #[default]
    Worker,
    /// On the caller's thread, before `route` returns.
    Inline,
}

/// Search and routing settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Maximum nodes to expand before giving up
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,

    /// Lowest allowed height above the terrain (m)
    #[serde(default)]
    pub surface_min: f32,

    /// Highest allowed height above the terrain (m)
    #[serde(default = "defaults::surface_max")]
    pub surface_max: f32,

    /// Radius of the collision sphere (m)
    #[serde(default = "defaults::obstacle_clearance_radius")]
    pub obstacle_clearance_radius: f32,

    /// Obstacle layers the collision sphere hits
    #[serde(default = "defaults::obstacle_layer_mask")]
    pub obstacle_layer_mask: u32,

    #[serde(default)]
    pub heuristic: HeuristicMode,

    #[serde(default)]
    pub routing: RoutingMode,

    #[serde(default)]
    pub dispatch: Dispatch,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            max_expansions: defaults::max_expansions(),
            surface_min: 0.0,
            surface_max: defaults::surface_max(),
            obstacle_clearance_radius: defaults::obstacle_clearance_radius(),
            obstacle_layer_mask: defaults::obstacle_layer_mask(),
            heuristic: HeuristicMode::default(),
            routing: RoutingMode::default(),
            dispatch: Dispatch::default(),
        }
    }
}

impl PlannerSettings {
    /// Builder-style setter for the expansion budget.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Builder-style setter for the clearance radius.
    pub fn with_clearance_radius(mut self, radius: f32) -> Self {
        self.obstacle_clearance_radius = radius;
        self
    }

    /// Builder-style setter for the heuristic.
    pub fn with_heuristic(mut self, heuristic: HeuristicMode) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Builder-style setter for the routing mode.
    pub fn with_routing(mut self, routing: RoutingMode) -> Self {
        self.routing = routing;
        self
    }

    /// Builder-style setter for the dispatch mode.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_expansions == 0 {
            return Err(ConfigError::ZeroExpansionBudget);
        }
        if !self.surface_min.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "surface_min",
            });
        }
        if !self.surface_max.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "surface_max",
            });
        }
        if self.surface_min > self.surface_max {
            return Err(ConfigError::InvertedSurfaceBand {
                min: self.surface_min,
                max: self.surface_max,
            });
        }
        require_positive("obstacle_clearance_radius", self.obstacle_clearance_radius)
    }
}
