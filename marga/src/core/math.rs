//! Angle helpers.
//!
//! All angles are in radians.

use super::point::Vec3;

/// Unsigned angle between two vectors, in [0, π].
///
/// Returns 0 when either vector has zero length.
///
/// # Example
/// ```
/// use marga::core::{Vec3, math::angle_between};
/// use std::f32::consts::FRAC_PI_2;
///
/// let a = Vec3::new(0.0, 0.0, 1.0);
/// let b = Vec3::new(2.0, 0.0, 0.0);
/// assert!((angle_between(a, b) - FRAC_PI_2).abs() < 1e-6);
/// ```
#[inline]
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let denom = a.length() * b.length();
    if denom <= f32::EPSILON {
        return 0.0;
    }
    (a.dot(&b) / denom).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_angle_between() {
        let fwd = Vec3::FORWARD;
        assert_relative_eq!(angle_between(fwd, fwd), 0.0, epsilon = 1e-3);
        assert_relative_eq!(angle_between(fwd, -fwd), PI, epsilon = 1e-3);
        assert_eq!(angle_between(fwd, Vec3::ZERO), 0.0);
    }
}
