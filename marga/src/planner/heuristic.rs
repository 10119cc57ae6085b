//! Cost-to-go estimates.

use crate::config::{HeuristicMode, MovementProperties};
use crate::core::PathNode;
use crate::core::math::angle_between;

/// Estimate the cost from `node` to `target`.
///
/// `ElapsedTime` mixes in the time already spent, plus a heading term that
/// charges one unit per rotation step needed to face the target. It orders the
/// frontier toward the soonest arrival and is not admissible, so the returned
/// path is not guaranteed to be the shortest. `Admissible` is the
/// straight-line travel time at full speed.
pub fn estimate(
    node: &PathNode,
    target: &PathNode,
    profile: &MovementProperties,
    mode: HeuristicMode,
) -> f32 {
    let distance = node.distance(target);
    match mode {
        HeuristicMode::ElapsedTime => {
            let heading_error = angle_between(node.direction, target.position - node.position);
            heading_error / profile.rotation_angle
                + 2.0 * distance / profile.max_speed
                + node.time_moment
        }
        HeuristicMode::Admissible => distance / profile.max_speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec3;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn profile() -> MovementProperties {
        MovementProperties::default().with_rotation(FRAC_PI_2 / 2.0, 2)
    }

    #[test]
    fn test_facing_target() {
        let node = PathNode::new(Vec3::ZERO, Vec3::FORWARD);
        let target = PathNode::at(Vec3::new(0.0, 0.0, 5.0));
        let h = estimate(&node, &target, &profile(), HeuristicMode::ElapsedTime);
        assert_relative_eq!(h, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_heading_and_time_terms() {
        let mut node = PathNode::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        node.time_moment = 3.0;
        let target = PathNode::at(Vec3::new(0.0, 0.0, 4.0));
        // 90 degrees off at 45 degrees per step => 2 steps
        let h = estimate(&node, &target, &profile(), HeuristicMode::ElapsedTime);
        assert_relative_eq!(h, 2.0 + 8.0 + 3.0, epsilon = 1e-4);
    }

    #[test]
    fn test_admissible_ignores_heading_and_time() {
        let mut node = PathNode::new(Vec3::ZERO, Vec3::new(-1.0, 0.0, 0.0));
        node.time_moment = 7.0;
        let target = PathNode::at(Vec3::new(0.0, 0.0, 4.0));
        let profile = profile().with_max_speed(2.0);
        let h = estimate(&node, &target, &profile, HeuristicMode::Admissible);
        assert_relative_eq!(h, 2.0);
    }

    #[test]
    fn test_at_target_has_no_heading_term() {
        let node = PathNode::new(Vec3::ZERO, Vec3::FORWARD);
        let target = PathNode::at(Vec3::ZERO);
        assert_eq!(
            estimate(&node, &target, &profile(), HeuristicMode::ElapsedTime),
            0.0
        );
    }
}
