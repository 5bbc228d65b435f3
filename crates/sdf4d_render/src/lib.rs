//! Sampling-side evaluation for sdf4d
//!
//! This crate packs a scene snapshot into the flat, buffer-ready form a
//! per-sample renderer consumes, and evaluates that packed form in parallel.
//!
//! ## Key Components
//!
//! - [`types::ShapeRecord`] - 112-byte packed primitive
//! - [`types::PassUniforms`] - per-pass scalars and [`types::RenderFlags`]
//! - [`payload::PassPayload`] - record buffer built once per pass
//! - [`sampler::FieldSampler`] - rayon-driven grid sampling of a payload
//!
//! Image synthesis itself (shading, shadows, ambient occlusion) is left to
//! whatever consumes the payload; the lighting settings are only carried.

pub mod types;
pub mod payload;
pub mod sampler;

pub use types::{PassUniforms, RenderFlags, ShapeRecord, SHAPE_RECORD_SIZE};
pub use payload::PassPayload;
pub use sampler::{FieldSampler, SliceGrid, SliceSamples};
