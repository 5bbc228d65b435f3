//! Core types for the sdf4d evaluator
//!
//! This crate turns a set of 4D-aware signed-distance primitives into a
//! single scene distance:
//!
//! - [`sdf`] - closed-form distance functions, 3D and 4D
//! - [`ShapeKind`] / [`Operation`] - closed shape set and boolean ops
//! - [`ShapeParams`] - typed view of a primitive's dimension slots
//! - [`Primitive`] / [`Observer`] - one shape, and the viewer's w-pose
//! - [`evaluate_one`] / [`Placement`] - single-primitive evaluation
//! - [`evaluate_scene`] / [`fold_distances`] - CSG fold with attribution
//! - [`ShapeWorld`] / [`ObjectKey`] - editable world of shape objects
//! - [`SceneRegistry`] - immutable per-pass snapshot of a world
//! - [`Scene`] - loadable/saveable RON scene

pub mod sdf;
mod shape;
mod params;
mod primitive;
mod field;
mod combine;
mod world;
mod registry;
mod scene;

pub use shape::{ShapeKind, Operation};
pub use params::{ShapeParams, DIMENSION_SLOTS};
pub use primitive::{Primitive, Observer};
pub use field::{distance_in_frame, evaluate_one, Placement, DEFAULT_FAR_DISTANCE};
pub use combine::{evaluate_scene, fold_distances, wrap_axis, wrap_point, DistanceSample};
pub use world::{ObjectKey, ShapeObject, ShapeWorld};
pub use registry::{RegistryEntry, SceneRegistry};
pub use scene::{ObjectTemplate, Scene, SceneLoadError, SceneSaveError};
pub use sdf::WSlice;

// Re-export commonly used types from sdf4d_math for convenience
pub use sdf4d_math::{Vec2, Vec3, Vec4, RotationPlane, DEG2RAD};
