//! Motion profile section.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, require_positive};

use super::defaults;

/// Agent motion envelope and search discretization.
///
/// Read-only for the duration of a search. Call [`MovementProperties::validate`]
/// (the router does) before handing a profile to the planner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementProperties {
    /// Maximum linear speed (m/s)
    #[serde(default = "defaults::max_speed")]
    pub max_speed: f32,

    /// Time advanced by one expansion step (s)
    #[serde(default = "defaults::delta_time")]
    pub delta_time: f32,

    /// Maximum heading change per angle step (rad)
    #[serde(default = "defaults::rotation_angle")]
    pub rotation_angle: f32,

    /// Discrete headings sampled on each side of straight ahead
    #[serde(default = "defaults::angle_steps")]
    pub angle_steps: u32,

    /// Position bucket size of the visited grid (m)
    #[serde(default = "defaults::delta_dist")]
    pub delta_dist: f32,

    /// Goal proximity tolerance (m)
    #[serde(default = "defaults::epsilon")]
    pub epsilon: f32,
}

impl Default for MovementProperties {
    fn default() -> Self {
        Self {
            max_speed: defaults::max_speed(),
            delta_time: defaults::delta_time(),
            rotation_angle: defaults::rotation_angle(),
            angle_steps: defaults::angle_steps(),
            delta_dist: defaults::delta_dist(),
            epsilon: defaults::epsilon(),
        }
    }
}

impl MovementProperties {
    /// Distance covered by one forward step.
    #[inline]
    pub fn step_length(&self) -> f32 {
        self.max_speed * self.delta_time
    }

    /// Upper bound on successors generated per expansion.
    #[inline]
    pub fn branching_factor(&self) -> usize {
        2 * (2 * self.angle_steps as usize + 1)
    }

    /// Builder-style setter for speed.
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Builder-style setter for the heading sampling.
    pub fn with_rotation(mut self, rotation_angle: f32, angle_steps: u32) -> Self {
        self.rotation_angle = rotation_angle;
        self.angle_steps = angle_steps;
        self
    }

    /// Builder-style setter for goal tolerance.
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builder-style setter for the visited grid bucket size.
    pub fn with_delta_dist(mut self, delta_dist: f32) -> Self {
        self.delta_dist = delta_dist;
        self
    }

    /// Reject profiles the search cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("max_speed", self.max_speed)?;
        require_positive("delta_time", self.delta_time)?;
        require_positive("delta_dist", self.delta_dist)?;
        require_positive("rotation_angle", self.rotation_angle)?;
        require_positive("epsilon", self.epsilon)?;
        Ok(())
    }
}
