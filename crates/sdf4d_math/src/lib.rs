//! Vector math for 4D distance fields
//!
//! This crate provides the small vector toolkit every distance function in
//! `sdf4d_core` is written against.
//!
//! ## Core Types
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - plain `f32` vectors, GPU-layout compatible
//! - [`RotationPlane`] - the 6 coordinate planes of 4D space
//!
//! ## Helpers
//!
//! - [`dot2`] / [`dot2_3`] - squared length
//! - [`ndot`] - "negative" dot product used by torus-like shapes
//! - [`rotate_pair`] - 2D rotation applied to a pair of components

#[macro_use]
mod ops;
mod vec2;
mod vec3;
mod vec4;
mod rotation;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use rotation::{rotate_pair, RotationPlane, DEG2RAD};

/// Squared length of a 2-vector
#[inline]
pub fn dot2(v: Vec2) -> f32 {
    v.dot(v)
}

/// Squared length of a 3-vector
#[inline]
pub fn dot2_3(v: Vec3) -> f32 {
    v.dot(v)
}

/// `a.x * b.x - a.y * b.y`
#[inline]
pub fn ndot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x - a.y * b.y
}
