//! Parallel field sampling
//!
//! Evaluates a [`PassPayload`] over a planar grid of points. Each row is an
//! independent chunk, so rows are spread across the rayon pool with
//! `par_chunks_mut`. Every sample only reads the payload.

use rayon::prelude::*;
use sdf4d_core::{DistanceSample, Vec3};

use crate::payload::PassPayload;

/// A planar grid of sample points
///
/// Point `(col, row)` is `origin + col * u_step + row * v_step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceGrid {
    pub origin: Vec3,
    pub u_step: Vec3,
    pub v_step: Vec3,
    pub width: usize,
    pub height: usize,
}

impl SliceGrid {
    /// Create a grid from an origin and per-step offsets
    pub fn new(origin: Vec3, u_step: Vec3, v_step: Vec3, width: usize, height: usize) -> Self {
        Self { origin, u_step, v_step, width, height }
    }

    /// Horizontal grid at height `centre.y`, spanning `half_extent` around `centre` in X and Z
    ///
    /// Rows run from -Z to +Z and columns from -X to +X.
    pub fn horizontal(centre: Vec3, half_extent: f32, width: usize, height: usize) -> Self {
        let step = |n: usize| if n > 1 { 2.0 * half_extent / (n - 1) as f32 } else { 0.0 };
        Self {
            origin: centre - Vec3::new(half_extent, 0.0, half_extent),
            u_step: Vec3::X * step(width),
            v_step: Vec3::Z * step(height),
            width,
            height,
        }
    }

    /// Vertical grid in the XY plane at depth `centre.z`
    ///
    /// Rows run from +Y down to -Y so the first row is the top of the image.
    pub fn vertical(centre: Vec3, half_extent: f32, width: usize, height: usize) -> Self {
        let step = |n: usize| if n > 1 { 2.0 * half_extent / (n - 1) as f32 } else { 0.0 };
        Self {
            origin: centre + Vec3::new(-half_extent, half_extent, 0.0),
            u_step: Vec3::X * step(width),
            v_step: Vec3::DOWN * step(height),
            width,
            height,
        }
    }

    /// World position of a grid cell
    #[inline]
    pub fn point(&self, col: usize, row: usize) -> Vec3 {
        self.origin + self.u_step * col as f32 + self.v_step * row as f32
    }

    /// Total number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Check if the grid has no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Row-major samples of one grid
#[derive(Clone, Debug, PartialEq)]
pub struct SliceSamples {
    pub width: usize,
    pub height: usize,
    pub samples: Vec<DistanceSample<usize>>,
}

impl SliceSamples {
    /// Sample at `(col, row)`
    pub fn get(&self, col: usize, row: usize) -> Option<&DistanceSample<usize>> {
        if col >= self.width {
            return None;
        }
        self.samples.get(row * self.width + col)
    }

    /// Iterate rows
    pub fn rows(&self) -> impl Iterator<Item = &[DistanceSample<usize>]> {
        // chunks(0) panics, and an empty grid has no rows anyway
        self.samples.chunks(self.width.max(1))
    }

    /// Number of samples inside the scene
    pub fn inside_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_inside()).count()
    }
}

/// Samples a payload over grids
pub struct FieldSampler<'a> {
    payload: &'a PassPayload,
}

impl<'a> FieldSampler<'a> {
    /// Create a sampler reading `payload`
    pub fn new(payload: &'a PassPayload) -> Self {
        Self { payload }
    }

    /// Sample every grid point in parallel, one row per task
    pub fn sample(&self, grid: &SliceGrid) -> SliceSamples {
        let mut samples = vec![DistanceSample::EMPTY; grid.len()];
        if !grid.is_empty() {
            let payload = self.payload;
            samples
                .par_chunks_mut(grid.width)
                .enumerate()
                .for_each(|(row, out)| {
                    for (col, sample) in out.iter_mut().enumerate() {
                        *sample = payload.evaluate(grid.point(col, row));
                    }
                });
        }
        SliceSamples {
            width: grid.width,
            height: grid.height,
            samples,
        }
    }

    /// Sample every grid point on the calling thread
    pub fn sample_serial(&self, grid: &SliceGrid) -> SliceSamples {
        let mut samples = Vec::with_capacity(grid.len());
        for row in 0..grid.height {
            for col in 0..grid.width {
                samples.push(self.payload.evaluate(grid.point(col, row)));
            }
        }
        SliceSamples {
            width: grid.width,
            height: grid.height,
            samples,
        }
    }
}
