//! Closed-form signed distance functions
//!
//! Every function takes a point already expressed in the primitive's local
//! frame (translated and rotated) and returns the signed distance to the
//! surface: zero on the surface, negative inside, positive outside, in the
//! same units as the input point. Unsigned shapes (`ud_*`) are never
//! negative.
//!
//! The 4D shapes in [`hyper`] additionally take a [`WSlice`] and lift the
//! point into 4D with [`lift`] before evaluating.

pub mod solids;
pub mod revolved;
pub mod surfaces;
pub mod hyper;

pub use solids::*;
pub use revolved::*;
pub use surfaces::*;
pub use hyper::*;

use sdf4d_math::{RotationPlane, Vec3, Vec4};

/// A primitive's placement along the fourth axis, relative to the observer
///
/// `pos` is the w distance between primitive and observer; `rot` holds the
/// three w-coupling rotation angles in radians (x couples XW, y couples YW,
/// z couples ZW, each also driving one spatial plane, see [`lift`]).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WSlice {
    pub pos: f32,
    pub rot: Vec3,
}

impl WSlice {
    /// No 4D offset: the observer sits exactly on the primitive's w
    pub const ZERO: Self = Self { pos: 0.0, rot: Vec3::ZERO };

    /// Create a w slice from a position and radian rotation
    pub const fn new(pos: f32, rot: Vec3) -> Self {
        Self { pos, rot }
    }
}

/// Lift a local 3D point into the primitive's 4D frame
///
/// Appends `w.pos` as the fourth coordinate, then applies six plane
/// rotations in this exact order: XZ by `-rot.y`, YZ by `rot.x`, XY by
/// `rot.z`, XW by `-rot.x`, ZW by `rot.z`, YW by `rot.y`.
pub fn lift(p: Vec3, w: WSlice) -> Vec4 {
    let r = w.rot;
    Vec4::from_xyz_w(p, w.pos)
        .rotated(RotationPlane::XZ, -r.y)
        .rotated(RotationPlane::YZ, r.x)
        .rotated(RotationPlane::XY, r.z)
        .rotated(RotationPlane::XW, -r.x)
        .rotated(RotationPlane::ZW, r.z)
        .rotated(RotationPlane::YW, r.y)
}

/// Sign with a zero case, unlike `f32::signum`
#[inline]
pub(crate) fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
