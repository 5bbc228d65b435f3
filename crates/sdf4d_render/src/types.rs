//! Buffer-compatible data types for the per-pass payload
//!
//! These types are laid out to match a shader's structured buffer exactly.
//! All types derive Pod and Zeroable for safe buffer uploads.

use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};
use sdf4d_core::{Observer, Primitive, DEG2RAD, DIMENSION_SLOTS};

/// Byte size of one packed [`ShapeRecord`]
pub const SHAPE_RECORD_SIZE: usize = 112;

/// One primitive as the sampling context sees it
///
/// Angles are radians and the w terms are already relative to the
/// observer. The stride is fixed at 112 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ShapeRecord {
    /// World position
    pub pos: [f32; 3],
    /// w offset relative to the observer
    pub pos_w: f32,
    /// Euler rotation (radians)
    pub rot: [f32; 3],
    /// w-coupling rotation relative to the observer (radians)
    pub rot_w: [f32; 3],
    /// RGB colour
    pub col: [f32; 3],
    /// Blend factor scaled by 100 (reserved, not applied)
    pub blend_factor: f32,
    /// Shape kind index
    pub shape_index: i32,
    /// Operation index
    pub op_index: i32,
    /// Dimension slots a..l
    pub dimensions: [f32; DIMENSION_SLOTS],
}

impl ShapeRecord {
    /// Pack `primitive` as seen by `observer`
    pub fn pack(primitive: &Primitive, observer: &Observer) -> Self {
        Self {
            pos: primitive.position.to_array(),
            pos_w: primitive.w_offset - observer.w_pos,
            rot: (primitive.rotation * DEG2RAD).to_array(),
            rot_w: ((primitive.w_rotation - observer.w_rot) * DEG2RAD).to_array(),
            col: primitive.color.to_array(),
            blend_factor: primitive.blend_factor * 100.0,
            shape_index: primitive.shape.index(),
            op_index: primitive.operation.index(),
            dimensions: primitive.dimensions,
        }
    }
}

bitflags! {
    /// Lighting toggles carried to the renderer
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u32 {
        /// Apply diffuse lighting
        const LIT = 1 << 0;
        /// Hard rather than soft shadows
        const HARD_SHADOW = 1 << 1;
        /// Ambient occlusion
        const AMBIENT_OCCLUSION = 1 << 2;
    }
}

/// Per-pass scalars uploaded next to the record buffer
/// Layout: 112 bytes total, seven 16-byte rows
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PassUniforms {
    /// Observer w rotation in degrees
    pub observer_w_rot: [f32; 3],
    /// Observer w position
    pub observer_w_pos: f32,
    /// Tiling period (zero = no tiling on that axis)
    pub loop_period: [f32; 3],
    /// Number of records in the buffer
    pub shape_count: u32,
    /// Direction the light travels
    pub light_dir: [f32; 3],
    pub light_intensity: f32,
    pub light_color: [f32; 3],
    pub shadow_intensity: f32,
    /// March step cap
    pub max_steps: f32,
    /// March distance cap
    pub max_dist: f32,
    /// Hit threshold
    pub surf_dist: f32,
    /// [`RenderFlags`] bits
    pub flags: u32,
    pub shadow_min: f32,
    pub shadow_max: f32,
    pub shadow_smooth: f32,
    pub ao_step: f32,
    pub ao_intensity: f32,
    pub ao_iterations: u32,
    /// Padding to align to 16 bytes
    pub _padding: [f32; 2],
}

impl Default for PassUniforms {
    fn default() -> Self {
        Self {
            observer_w_rot: [0.0; 3],
            observer_w_pos: 0.0,
            loop_period: [0.0; 3],
            shape_count: 0,
            light_dir: [0.0, -1.0, 0.0],
            light_intensity: 1.0,
            light_color: [1.0; 3],
            shadow_intensity: 1.0,
            max_steps: 225.0,
            max_dist: 1000.0,
            surf_dist: 0.01,
            flags: RenderFlags::HARD_SHADOW.bits(),
            shadow_min: 0.1,
            shadow_max: 100.0,
            shadow_smooth: 8.0,
            ao_step: 0.1,
            ao_intensity: 0.25,
            ao_iterations: 3,
            _padding: [0.0; 2],
        }
    }
}

impl PassUniforms {
    /// Lighting toggles, ignoring unknown bits
    pub fn render_flags(&self) -> RenderFlags {
        RenderFlags::from_bits_truncate(self.flags)
    }
}
