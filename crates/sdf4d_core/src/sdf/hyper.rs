//! Four-dimensional primitives
//!
//! Each function lifts the local 3D point into 4D with [`lift`], so what
//! the observer sees is the 3D cross-section at its own w-pose. Moving the
//! observer along w sweeps the slice through the solid.

use sdf4d_math::{Vec2, Vec3, Vec4};

use super::{lift, WSlice};

/// Iteration cap for the fractal estimator
const MAX_FRACTAL_ITERATIONS: usize = 64;

/// Mandelbulb distance estimate on the lifted point
///
/// `iterations` is truncated to a whole number in `1..=64`; `power` is the
/// bulb exponent (8 gives the classic shape) and `bailout` the escape radius.
pub fn sd_fractal(p: Vec3, iterations: f32, power: f32, bailout: f32, w: WSlice) -> f32 {
    let c = lift(p, w).xyz();
    let iterations = (iterations.max(1.0) as usize).min(MAX_FRACTAL_ITERATIONS);

    let mut z = c;
    let mut dr = 1.0;
    let mut r = 0.0;
    for _ in 0..iterations {
        r = z.length();
        if r > bailout || r == 0.0 {
            break;
        }
        let theta = (z.z / r).acos() * power;
        let phi = z.y.atan2(z.x) * power;
        dr = r.powf(power - 1.0) * power * dr + 1.0;
        let zr = r.powf(power);
        z = zr * Vec3::new(theta.sin() * phi.cos(), phi.sin() * theta.sin(), theta.cos()) + c;
    }
    if r == 0.0 {
        return 0.0;
    }
    0.5 * r.ln() * r / dr
}

/// Tesseract (4D box) with half extents `b`
pub fn sd_tesseract(p: Vec3, b: Vec4, w: WSlice) -> f32 {
    let d = lift(p, w).abs() - b;
    d.max_element().min(0.0) + d.max_zero().length()
}

/// Hypersphere (3-sphere) of radius `r`
pub fn sd_hyper_sphere(p: Vec3, r: f32, w: WSlice) -> f32 {
    lift(p, w).length() - r
}

/// Duo-cylinder: product of a disc of radius `r.x` in XZ and `r.y` in YW
pub fn sd_duo_cylinder(p: Vec3, r: Vec2, w: WSlice) -> f32 {
    let p4 = lift(p, w);
    let d = Vec2::new(p4.xz().length(), p4.yw().length()).abs() - r;
    d.x.max(d.y).min(0.0) + d.max_zero().length()
}

/// 4D capsule around the segment from the origin to `h` along Y
pub fn sd_vertical_capsule(p: Vec3, h: f32, r: f32, w: WSlice) -> f32 {
    let mut p4 = lift(p, w);
    p4.y -= p4.y.clamp(0.0, h);
    p4.length() - r
}

/// Tetrahedral 5-cell estimator
///
/// `a.x` is the size. `a.w` stretches the cell along w: the cross-section
/// at w is the tetrahedron shifted by `w / a.w`; a zero `a.w` makes it a
/// prism along w. `a.y` and `a.z` are unused.
///
/// This is a bound, not an exact distance. The face planes are combined
/// with `max` and scaled by a single `1/sqrt(3)`, which is only the true
/// plane normalisation when `a.w` is zero; away from the faces it
/// underestimates.
pub fn sd_five_cell(p: Vec3, a: Vec4, w: WSlice) -> f32 {
    let p4 = lift(p, w);
    let ws = if a.w == 0.0 { 0.0 } else { p4.w / a.w };
    let faces = ((p4.x + p4.y + ws).abs() - p4.z)
        .max((p4.x - p4.y + ws).abs() + p4.z)
        .max((p4.x - p4.y - ws).abs() + p4.z)
        .max((p4.x + p4.y - ws).abs() - p4.z);
    (faces - a.x) / 3f32.sqrt()
}

/// 16-cell (4D cross-polytope) with vertices at distance `s` along each axis
///
/// A bound rather than an exact distance. The facet normals are
/// `(±1, ±1, ±1, ±1) / 2`, so this is exact over the facets and
/// underestimates near the lower-dimensional faces.
pub fn sd_sixteen_cell(p: Vec3, s: f32, w: WSlice) -> f32 {
    let p4 = lift(p, w).abs();
    (p4.x + p4.y + p4.z + p4.w - s) * 0.5
}
