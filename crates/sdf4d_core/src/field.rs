//! Single-primitive field evaluation
//!
//! Both the host path and the packed payload path describe a primitive's
//! frame with the same [`Placement`] and go through [`distance_in_frame`],
//! so the two agree bit for bit on the same inputs.

use sdf4d_math::{rotate_pair, Vec3, DEG2RAD};

use crate::params::{ShapeParams, DIMENSION_SLOTS};
use crate::primitive::{Observer, Primitive};
use crate::sdf::WSlice;
use crate::shape::ShapeKind;

/// Distance reported for shapes that cannot be resolved
pub const DEFAULT_FAR_DISTANCE: f32 = 1000.0;

/// A primitive's frame for one pass, with all angles in radians
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    /// World position
    pub position: Vec3,
    /// Euler rotation
    pub rotation: Vec3,
    /// w distance from the observer
    pub w_pos: f32,
    /// w-coupling rotation relative to the observer
    pub w_rot: Vec3,
}

impl Placement {
    /// Create a placement from values already in radians
    pub const fn new(position: Vec3, rotation: Vec3, w_pos: f32, w_rot: Vec3) -> Self {
        Self { position, rotation, w_pos, w_rot }
    }

    /// Frame of `primitive` as seen by `observer`
    pub fn relative_to(primitive: &Primitive, observer: &Observer) -> Self {
        Self {
            position: primitive.position,
            rotation: primitive.rotation * DEG2RAD,
            w_pos: primitive.w_offset - observer.w_pos,
            w_rot: (primitive.w_rotation - observer.w_rot) * DEG2RAD,
        }
    }

    /// Bring a world point into the primitive's local 3D frame
    ///
    /// Translates, then undoes the Euler rotation one plane at a time: YZ by
    /// `rotation.x`, XZ by `-rotation.y`, XY by `rotation.z`.
    pub fn to_local(&self, world_point: Vec3) -> Vec3 {
        let mut p = world_point - self.position;
        (p.y, p.z) = rotate_pair(p.y, p.z, self.rotation.x);
        (p.x, p.z) = rotate_pair(p.x, p.z, -self.rotation.y);
        (p.x, p.y) = rotate_pair(p.x, p.y, self.rotation.z);
        p
    }

    /// The 4D slice handed to the distance functions
    #[inline]
    pub fn w_slice(&self) -> WSlice {
        WSlice::new(self.w_pos, self.w_rot)
    }
}

/// Signed distance from `world_point` to a shape placed at `placement`
///
/// `kind` is `None` when the shape index named no known shape; the result
/// is then `far` rather than an error.
pub fn distance_in_frame(
    kind: Option<ShapeKind>,
    dims: &[f32; DIMENSION_SLOTS],
    placement: &Placement,
    world_point: Vec3,
    far: f32,
) -> f32 {
    match kind {
        Some(kind) => ShapeParams::resolve(kind, dims)
            .distance(placement.to_local(world_point), placement.w_slice()),
        None => far,
    }
}

/// Signed distance from `world_point` to one primitive
pub fn evaluate_one(primitive: &Primitive, world_point: Vec3, observer: &Observer) -> f32 {
    let placement = Placement::relative_to(primitive, observer);
    distance_in_frame(
        Some(primitive.shape),
        &primitive.dimensions,
        &placement,
        world_point,
        DEFAULT_FAR_DISTANCE,
    )
}
