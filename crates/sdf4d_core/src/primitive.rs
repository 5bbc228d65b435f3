//! Shape primitives and the observer's 4D pose

use serde::{Serialize, Deserialize};
use sdf4d_math::Vec3;

use crate::params::{ShapeParams, DIMENSION_SLOTS};
use crate::shape::{Operation, ShapeKind};

/// One shape in a scene
///
/// Angles are stored in degrees, the way they are authored. `position` is
/// the world position the host supplies for this pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Primitive {
    /// Which distance function to evaluate
    pub shape: ShapeKind,
    /// How this primitive folds into the scene distance
    pub operation: Operation,
    /// World position
    pub position: Vec3,
    /// Euler rotation in degrees
    pub rotation: Vec3,
    /// Position along the fourth axis
    pub w_offset: f32,
    /// Rotation coupling w with each spatial axis, in degrees
    pub w_rotation: Vec3,
    /// Reserved smooth-blend factor; carried through to the payload but never applied
    pub blend_factor: f32,
    /// Shape parameters; which slots are read depends on `shape`
    pub dimensions: [f32; DIMENSION_SLOTS],
    /// Display colour
    pub color: Vec3,
}

impl Default for Primitive {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Sphere,
            operation: Operation::Union,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            w_offset: 0.0,
            w_rotation: Vec3::ZERO,
            blend_factor: 0.0,
            dimensions: {
                let mut d = [0.0; DIMENSION_SLOTS];
                d[0] = 1.0;
                d
            },
            color: Vec3::ONE,
        }
    }
}

impl Primitive {
    /// Create a primitive of `shape` with the given leading dimension slots
    ///
    /// Slots beyond `dims.len()` are zero. Extra values past twelve are dropped.
    pub fn new(shape: ShapeKind, dims: &[f32]) -> Self {
        let mut dimensions = [0.0; DIMENSION_SLOTS];
        let n = dims.len().min(DIMENSION_SLOTS);
        dimensions[..n].copy_from_slice(&dims[..n]);
        Self {
            shape,
            dimensions,
            ..Self::default()
        }
    }

    /// Set the world position
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the boolean operation
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    /// Set the Euler rotation (degrees)
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the 4D offset and rotation (degrees)
    pub fn with_w(mut self, w_offset: f32, w_rotation: Vec3) -> Self {
        self.w_offset = w_offset;
        self.w_rotation = w_rotation;
        self
    }

    /// Set the display colour
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Typed view of the dimension slots
    pub fn params(&self) -> ShapeParams {
        ShapeParams::resolve(self.shape, &self.dimensions)
    }
}

/// The viewer's pose along the fourth axis
///
/// Selects which 3D cross-section of every 4D primitive is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Observer {
    /// Position along w
    pub w_pos: f32,
    /// Rotation about the w-coupling planes, in degrees
    pub w_rot: Vec3,
}

impl Observer {
    /// Create an observer pose
    pub const fn new(w_pos: f32, w_rot: Vec3) -> Self {
        Self { w_pos, w_rot }
    }
}
