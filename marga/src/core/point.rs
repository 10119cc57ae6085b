//! World-space vector type.
//!
//! The world frame is Y-up: the walkable plane is spanned by X and Z,
//! terrain height is measured along Y and headings rotate about the Y axis.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// World coordinates (meters, f32)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X coordinate (horizontal)
    pub x: f32,
    /// Y coordinate (up)
    pub y: f32,
    /// Z coordinate (horizontal, forward)
    pub z: f32,
}

impl Vec3 {
    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero vector (origin)
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// Unit vector along +Z, the default heading
    pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Vec3) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (faster, avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Vec3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalize to unit length. Zero vectors are returned unchanged.
    #[inline]
    pub fn normalize(&self) -> Vec3 {
        let len = self.length();
        if len > 0.0 { *self * (1.0 / len) } else { *self }
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Rotate about the Y axis by `angle` radians.
    ///
    /// Positive angles turn +Z toward +X (clockwise seen from above).
    #[inline]
    pub fn rotate_y(&self, angle: f32) -> Vec3 {
        let (sin_a, cos_a) = angle.sin_cos();
        Vec3::new(
            self.x * cos_a + self.z * sin_a,
            self.y,
            -self.x * sin_a + self.z * cos_a,
        )
    }

    /// Projection onto the walkable X/Z plane
    #[inline]
    pub fn horizontal(&self) -> Vec3 {
        Vec3::new(self.x, 0.0, self.z)
    }

    /// True if every component is finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_distance() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 0.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        let r = Vec3::FORWARD.rotate_y(FRAC_PI_2);
        assert_relative_eq!(r.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(r.y, 0.0);
        assert_relative_eq!(r.z, 0.0, epsilon = 1e-6);

        let back = r.rotate_y(-FRAC_PI_2);
        assert_relative_eq!(back.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        assert_relative_eq!(Vec3::new(0.0, 3.0, 4.0).normalize().length(), 1.0);
    }
}
