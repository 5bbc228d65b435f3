//! Text preview of one slice of the scene
//!
//! Packs a registry snapshot into a pass payload, samples a vertical grid
//! through it in parallel, and prints the result as characters.

use sdf4d_core::{SceneRegistry, Vec3};
use sdf4d_render::{FieldSampler, PassPayload, PassUniforms, SliceGrid, SliceSamples};

use crate::config::PreviewConfig;

/// Inside the scene
const SOLID: char = '#';
/// Outside, within [`NEAR_BAND`] of a surface
const NEAR: char = '+';
const EMPTY: char = '.';
/// Probe position marker
const PROBE: char = '@';

/// Distance below which an outside sample is drawn as [`NEAR`]
const NEAR_BAND: f32 = 0.25;

/// Renders vertical slices as text
pub struct PreviewSystem {
    width: usize,
    height: usize,
    half_extent: f32,
}

impl PreviewSystem {
    /// Create a preview from configuration
    pub fn new(config: &PreviewConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            half_extent: config.half_extent,
        }
    }

    /// Grid in the XY plane centred on `centre`
    pub fn grid(&self, centre: Vec3) -> SliceGrid {
        SliceGrid::vertical(centre, self.half_extent, self.width, self.height)
    }

    /// Sample and draw the slice through `centre`, marking `probe` if it falls on a cell
    pub fn render(
        &self,
        registry: &SceneRegistry,
        uniforms: &PassUniforms,
        centre: Vec3,
        probe: Option<Vec3>,
    ) -> String {
        let payload = PassPayload::build(registry, uniforms);
        let grid = self.grid(centre);
        let samples = FieldSampler::new(&payload).sample(&grid);
        log::debug!(
            "Preview {}x{}: {} of {} samples inside",
            grid.width,
            grid.height,
            samples.inside_count(),
            grid.len()
        );
        // payload drops here, at the end of the pass
        draw(&samples, probe.and_then(|p| nearest_cell(&grid, p)))
    }
}

/// Grid cell closest to `point`, if it lies within the grid
fn nearest_cell(grid: &SliceGrid, point: Vec3) -> Option<(usize, usize)> {
    let rel = point - grid.origin;
    let axis = |step: Vec3, n: usize| -> Option<usize> {
        let len2 = step.dot(step);
        if len2 == 0.0 {
            return if n > 0 { Some(0) } else { None };
        }
        let t = (rel.dot(step) / len2).round();
        (t >= 0.0 && (t as usize) < n).then_some(t as usize)
    };
    Some((axis(grid.u_step, grid.width)?, axis(grid.v_step, grid.height)?))
}

fn draw(samples: &SliceSamples, marker: Option<(usize, usize)>) -> String {
    let mut out = String::with_capacity((samples.width + 1) * samples.height);
    for (row, cells) in samples.rows().enumerate() {
        for (col, sample) in cells.iter().enumerate() {
            let c = if marker == Some((col, row)) {
                PROBE
            } else if sample.is_inside() {
                SOLID
            } else if sample.distance < NEAR_BAND {
                NEAR
            } else {
                EMPTY
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
