//! 4D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::{rotate_pair, RotationPlane, Vec2, Vec3};

/// 4D Vector with x, y, z, w components
/// The w component represents the 4th spatial dimension (ana/kata)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Extend a 3D point with a w coordinate
    #[inline]
    pub const fn from_xyz_w(p: Vec3, w: f32) -> Self {
        Self { x: p.x, y: p.y, z: p.z, w }
    }

    /// Extract the xyz components
    #[inline]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// (x, z) swizzle
    #[inline]
    pub fn xz(self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    /// (y, w) swizzle
    #[inline]
    pub fn yw(self) -> Vec2 {
        Vec2::new(self.y, self.w)
    }

    /// Component by index (0 = x, 1 = y, 2 = z, 3 = w)
    #[inline]
    pub fn get(&self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => self.w,
        }
    }

    /// Mutable component by index (0 = x, 1 = y, 2 = z, 3 = w)
    #[inline]
    pub fn get_mut(&mut self, axis: usize) -> &mut f32 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => &mut self.w,
        }
    }

    /// Rotate the two components spanning `plane` by `angle` radians
    #[inline]
    pub fn rotated(self, plane: RotationPlane, angle: f32) -> Self {
        let (i, j) = plane.axes();
        let mut out = self;
        let (a, b) = rotate_pair(self.get(i), self.get(j), angle);
        *out.get_mut(i) = a;
        *out.get_mut(j) = b;
        out
    }
}

impl_vector_ops!(Vec4 { x, y, z, w });
