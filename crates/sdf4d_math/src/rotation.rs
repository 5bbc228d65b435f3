//! Plane rotations in 3D and 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, YZ, XW, YW, ZW.
//!
//! Distance fields never compose rotations into a matrix or rotor; they apply
//! a fixed sequence of single-plane rotations to the sample point, so the
//! only primitive needed here is "rotate this pair of components".

/// Degrees to radians
pub const DEG2RAD: f32 = std::f32::consts::PI / 180.0;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationPlane {
    /// XY plane - rotation around Z in 3D
    XY,
    /// XZ plane - rotation around Y in 3D
    XZ,
    /// YZ plane - rotation around X in 3D
    YZ,
    /// XW plane - couples X with the fourth axis
    XW,
    /// YW plane - couples Y with the fourth axis
    YW,
    /// ZW plane - couples Z with the fourth axis
    ZW,
}

impl RotationPlane {
    /// Component indices (into x, y, z, w) of the two axes spanning this plane
    #[inline]
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::YZ => (1, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Whether this plane involves the fourth axis
    #[inline]
    pub const fn touches_w(self) -> bool {
        matches!(self, RotationPlane::XW | RotationPlane::YW | RotationPlane::ZW)
    }
}

/// Rotate the pair `(a, b)` by `angle` radians
///
/// Treats the pair as a row vector multiplied by `[[cos, -sin], [sin, cos]]`:
/// `a' = a*cos + b*sin`, `b' = -a*sin + b*cos`. Pass `-angle` for the
/// transposed matrix.
#[inline]
pub fn rotate_pair(a: f32, b: f32, angle: f32) -> (f32, f32) {
    let (s, c) = angle.sin_cos();
    (a * c + b * s, -a * s + b * c)
}
