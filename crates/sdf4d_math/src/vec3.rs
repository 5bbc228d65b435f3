//! 3D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::{rotate_pair, RotationPlane, Vec2};

/// 3D Vector with x, y, z components
///
/// World-space query points, primitive positions and Euler angles all use
/// this type. It is 12 bytes with no padding so it can sit inside packed
/// GPU records as `[f32; 3]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };
    /// World down axis
    pub const DOWN: Self = Self { x: 0.0, y: -1.0, z: 0.0 };

    /// Create a new Vec3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a Vec3 with every component set to `v`
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// (x, y) swizzle
    #[inline]
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// (x, z) swizzle
    #[inline]
    pub fn xz(self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    /// (y, z) swizzle
    #[inline]
    pub fn yz(self) -> Vec2 {
        Vec2::new(self.y, self.z)
    }

    /// Component by index (0 = x, 1 = y, 2 = z)
    #[inline]
    pub fn get(&self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Mutable component by index (0 = x, 1 = y, 2 = z)
    #[inline]
    pub fn get_mut(&mut self, axis: usize) -> &mut f32 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }

    /// Rotate the components spanning `plane` by `angle` radians
    ///
    /// Planes that involve the fourth axis leave a 3-vector unchanged.
    #[inline]
    pub fn rotated(self, plane: RotationPlane, angle: f32) -> Self {
        if plane.touches_w() {
            return self;
        }
        let (i, j) = plane.axes();
        let mut out = self;
        let (a, b) = rotate_pair(self.get(i), self.get(j), angle);
        *out.get_mut(i) = a;
        *out.get_mut(j) = b;
        out
    }

    /// As a plain array
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl_vector_ops!(Vec3 { x, y, z });

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-6;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_cross() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_rotated_xy() {
        // Row-vector convention: (1, 0) -> (cos, -sin)
        let r = Vec3::X.rotated(RotationPlane::XY, FRAC_PI_2);
        assert!(approx(r, Vec3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn test_rotated_w_plane_is_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.rotated(RotationPlane::XW, 1.0), v);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec3::new(1.0, -2.0, 0.5);
        let r = v.rotated(RotationPlane::YZ, 0.8).rotated(RotationPlane::XZ, -2.1);
        assert!((r.length() - v.length()).abs() < 1e-5);
    }

    #[test]
    fn test_get_mut() {
        let mut v = Vec3::ZERO;
        *v.get_mut(1) = 4.0;
        assert_eq!(v, Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(v.get(1), 4.0);
    }

    #[test]
    fn test_element_extrema() {
        let v = Vec3::new(-1.0, 5.0, 2.0);
        assert_eq!(v.max_element(), 5.0);
        assert_eq!(v.min_element(), -1.0);
    }
}
