//! Typed shape parameters
//!
//! A primitive carries twelve loose `f32` slots. [`ShapeParams::resolve`]
//! reads the slots a given [`ShapeKind`] uses into a typed variant, and
//! [`ShapeParams::distance`] dispatches to the matching distance function.
//! Values are taken as-is: no validation, unused slots are never read.

use sdf4d_math::{Vec2, Vec3, Vec4};

use crate::sdf::{self, WSlice};
use crate::shape::ShapeKind;

/// Number of dimension slots on every primitive
pub const DIMENSION_SLOTS: usize = 12;

/// Resolved parameters for one primitive, one variant per [`ShapeKind`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeParams {
    Sphere { radius: f32 },
    Torus { radii: Vec2 },
    CappedTorus { ra: f32, rb: f32, sin_cos: Vec2 },
    Link { half_length: f32, r1: f32, r2: f32 },
    Plane { normal: Vec3, offset: f32 },
    Cone { sin_cos: Vec2, height: f32 },
    InfCone { sin_cos: Vec2 },
    HexPrism { size: Vec2 },
    TriPrism { size: Vec2 },
    Capsule { a: Vec3, b: Vec3, radius: f32 },
    InfiniteCylinder { axis: Vec3 },
    Box { half_extent: f32 },
    RoundBox { half_extent: f32, rounding: f32 },
    RoundedCylinder { ra: f32, rb: f32, half_height: f32 },
    CappedCone { half_height: f32, r1: f32, r2: f32 },
    BoxFrame { half_extents: Vec3, edge: f32 },
    SolidAngle { sin_cos: Vec2, radius: f32 },
    CutSphere { radius: f32, cut: f32 },
    CutHollowSphere { radius: f32, cut: f32, thickness: f32 },
    DeathStar { ra: f32, rb: f32, offset: f32 },
    RoundCone { r1: f32, r2: f32, height: f32 },
    Ellipsoid { radii: Vec3 },
    Rhombus { la: f32, lb: f32, half_height: f32, rounding: f32 },
    Octahedron { size: f32 },
    Pyramid { height: f32 },
    Triangle { a: Vec3, b: Vec3, c: Vec3 },
    Quad { a: Vec3, b: Vec3, c: Vec3, d: Vec3 },
    Fractal { iterations: f32, power: f32, bailout: f32 },
    Tesseract { half_extents: Vec4 },
    HyperSphere { radius: f32 },
    DuoCylinder { radii: Vec2 },
    VerticalCapsule { height: f32, radius: f32 },
    FiveCell { size: Vec4 },
    SixteenCell { size: f32 },
}

impl ShapeParams {
    /// Read the slots `kind` uses out of `dims`
    pub fn resolve(kind: ShapeKind, dims: &[f32; DIMENSION_SLOTS]) -> Self {
        let v2 = |i: usize| Vec2::new(dims[i], dims[i + 1]);
        let v3 = |i: usize| Vec3::new(dims[i], dims[i + 1], dims[i + 2]);
        let [a, b, c, d, ..] = *dims;

        match kind {
            ShapeKind::Sphere => ShapeParams::Sphere { radius: a },
            ShapeKind::Torus => ShapeParams::Torus { radii: v2(0) },
            ShapeKind::CappedTorus => ShapeParams::CappedTorus { ra: a, rb: b, sin_cos: v2(2) },
            ShapeKind::Link => ShapeParams::Link { half_length: a, r1: b, r2: c },
            ShapeKind::Plane => ShapeParams::Plane { normal: v3(0), offset: d },
            ShapeKind::Cone => ShapeParams::Cone { sin_cos: v2(0), height: c },
            ShapeKind::InfCone => ShapeParams::InfCone { sin_cos: v2(0) },
            ShapeKind::HexPrism => ShapeParams::HexPrism { size: v2(0) },
            ShapeKind::TriPrism => ShapeParams::TriPrism { size: v2(0) },
            ShapeKind::Capsule => ShapeParams::Capsule { a: v3(0), b: v3(3), radius: dims[6] },
            ShapeKind::InfiniteCylinder => ShapeParams::InfiniteCylinder { axis: v3(0) },
            ShapeKind::Box => ShapeParams::Box { half_extent: a },
            ShapeKind::RoundBox => ShapeParams::RoundBox { half_extent: a, rounding: b },
            ShapeKind::RoundedCylinder => ShapeParams::RoundedCylinder { ra: a, rb: b, half_height: c },
            ShapeKind::CappedCone => ShapeParams::CappedCone { half_height: a, r1: b, r2: c },
            ShapeKind::BoxFrame => ShapeParams::BoxFrame { half_extents: v3(0), edge: d },
            ShapeKind::SolidAngle => ShapeParams::SolidAngle { sin_cos: v2(0), radius: c },
            ShapeKind::CutSphere => ShapeParams::CutSphere { radius: a, cut: b },
            ShapeKind::CutHollowSphere => {
                ShapeParams::CutHollowSphere { radius: a, cut: b, thickness: c }
            }
            ShapeKind::DeathStar => ShapeParams::DeathStar { ra: a, rb: b, offset: c },
            ShapeKind::RoundCone => ShapeParams::RoundCone { r1: a, r2: b, height: c },
            ShapeKind::Ellipsoid => ShapeParams::Ellipsoid { radii: v3(0) },
            ShapeKind::Rhombus => {
                ShapeParams::Rhombus { la: a, lb: b, half_height: c, rounding: d }
            }
            ShapeKind::Octahedron => ShapeParams::Octahedron { size: a },
            ShapeKind::Pyramid => ShapeParams::Pyramid { height: a },
            ShapeKind::Triangle => ShapeParams::Triangle { a: v3(0), b: v3(3), c: v3(6) },
            ShapeKind::Quad => ShapeParams::Quad { a: v3(0), b: v3(3), c: v3(6), d: v3(9) },
            ShapeKind::Fractal => ShapeParams::Fractal { iterations: a, power: b, bailout: c },
            ShapeKind::Tesseract => ShapeParams::Tesseract { half_extents: Vec4::new(a, b, c, d) },
            ShapeKind::HyperSphere => ShapeParams::HyperSphere { radius: a },
            ShapeKind::DuoCylinder => ShapeParams::DuoCylinder { radii: v2(0) },
            ShapeKind::VerticalCapsule => ShapeParams::VerticalCapsule { height: a, radius: b },
            ShapeKind::FiveCell => ShapeParams::FiveCell { size: Vec4::new(a, b, c, d) },
            ShapeKind::SixteenCell => ShapeParams::SixteenCell { size: a },
        }
    }

    /// The kind these parameters were resolved for
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParams::Sphere { .. } => ShapeKind::Sphere,
            ShapeParams::Torus { .. } => ShapeKind::Torus,
            ShapeParams::CappedTorus { .. } => ShapeKind::CappedTorus,
            ShapeParams::Link { .. } => ShapeKind::Link,
            ShapeParams::Plane { .. } => ShapeKind::Plane,
            ShapeParams::Cone { .. } => ShapeKind::Cone,
            ShapeParams::InfCone { .. } => ShapeKind::InfCone,
            ShapeParams::HexPrism { .. } => ShapeKind::HexPrism,
            ShapeParams::TriPrism { .. } => ShapeKind::TriPrism,
            ShapeParams::Capsule { .. } => ShapeKind::Capsule,
            ShapeParams::InfiniteCylinder { .. } => ShapeKind::InfiniteCylinder,
            ShapeParams::Box { .. } => ShapeKind::Box,
            ShapeParams::RoundBox { .. } => ShapeKind::RoundBox,
            ShapeParams::RoundedCylinder { .. } => ShapeKind::RoundedCylinder,
            ShapeParams::CappedCone { .. } => ShapeKind::CappedCone,
            ShapeParams::BoxFrame { .. } => ShapeKind::BoxFrame,
            ShapeParams::SolidAngle { .. } => ShapeKind::SolidAngle,
            ShapeParams::CutSphere { .. } => ShapeKind::CutSphere,
            ShapeParams::CutHollowSphere { .. } => ShapeKind::CutHollowSphere,
            ShapeParams::DeathStar { .. } => ShapeKind::DeathStar,
            ShapeParams::RoundCone { .. } => ShapeKind::RoundCone,
            ShapeParams::Ellipsoid { .. } => ShapeKind::Ellipsoid,
            ShapeParams::Rhombus { .. } => ShapeKind::Rhombus,
            ShapeParams::Octahedron { .. } => ShapeKind::Octahedron,
            ShapeParams::Pyramid { .. } => ShapeKind::Pyramid,
            ShapeParams::Triangle { .. } => ShapeKind::Triangle,
            ShapeParams::Quad { .. } => ShapeKind::Quad,
            ShapeParams::Fractal { .. } => ShapeKind::Fractal,
            ShapeParams::Tesseract { .. } => ShapeKind::Tesseract,
            ShapeParams::HyperSphere { .. } => ShapeKind::HyperSphere,
            ShapeParams::DuoCylinder { .. } => ShapeKind::DuoCylinder,
            ShapeParams::VerticalCapsule { .. } => ShapeKind::VerticalCapsule,
            ShapeParams::FiveCell { .. } => ShapeKind::FiveCell,
            ShapeParams::SixteenCell { .. } => ShapeKind::SixteenCell,
        }
    }

    /// Signed distance from the local point `p` to this shape
    ///
    /// `w` is only consulted by the 4D kinds.
    pub fn distance(&self, p: Vec3, w: WSlice) -> f32 {
        match *self {
            ShapeParams::Sphere { radius } => sdf::sd_sphere(p, radius),
            ShapeParams::Torus { radii } => sdf::sd_torus(p, radii),
            ShapeParams::CappedTorus { ra, rb, sin_cos } => sdf::sd_capped_torus(p, sin_cos, ra, rb),
            ShapeParams::Link { half_length, r1, r2 } => sdf::sd_link(p, half_length, r1, r2),
            ShapeParams::Plane { normal, offset } => sdf::sd_plane(p, normal, offset),
            ShapeParams::Cone { sin_cos, height } => sdf::sd_cone(p, sin_cos, height),
            ShapeParams::InfCone { sin_cos } => sdf::sd_inf_cone(p, sin_cos),
            ShapeParams::HexPrism { size } => sdf::sd_hex_prism(p, size),
            ShapeParams::TriPrism { size } => sdf::sd_tri_prism(p, size),
            ShapeParams::Capsule { a, b, radius } => sdf::sd_capsule(p, a, b, radius),
            ShapeParams::InfiniteCylinder { axis } => sdf::sd_infinite_cylinder(p, axis),
            ShapeParams::Box { half_extent } => sdf::sd_box(p, Vec3::splat(half_extent)),
            ShapeParams::RoundBox { half_extent, rounding } => {
                sdf::sd_round_box(p, Vec3::splat(half_extent), rounding)
            }
            ShapeParams::RoundedCylinder { ra, rb, half_height } => {
                sdf::sd_rounded_cylinder(p, ra, rb, half_height)
            }
            ShapeParams::CappedCone { half_height, r1, r2 } => {
                sdf::sd_capped_cone(p, half_height, r1, r2)
            }
            ShapeParams::BoxFrame { half_extents, edge } => sdf::sd_box_frame(p, half_extents, edge),
            ShapeParams::SolidAngle { sin_cos, radius } => sdf::sd_solid_angle(p, sin_cos, radius),
            ShapeParams::CutSphere { radius, cut } => sdf::sd_cut_sphere(p, radius, cut),
            ShapeParams::CutHollowSphere { radius, cut, thickness } => {
                sdf::sd_cut_hollow_sphere(p, radius, cut, thickness)
            }
            ShapeParams::DeathStar { ra, rb, offset } => sdf::sd_death_star(p, ra, rb, offset),
            ShapeParams::RoundCone { r1, r2, height } => sdf::sd_round_cone(p, r1, r2, height),
            ShapeParams::Ellipsoid { radii } => sdf::sd_ellipsoid(p, radii),
            ShapeParams::Rhombus { la, lb, half_height, rounding } => {
                sdf::sd_rhombus(p, la, lb, half_height, rounding)
            }
            ShapeParams::Octahedron { size } => sdf::sd_octahedron(p, size),
            ShapeParams::Pyramid { height } => sdf::sd_pyramid(p, height),
            ShapeParams::Triangle { a, b, c } => sdf::ud_triangle(p, a, b, c),
            ShapeParams::Quad { a, b, c, d } => sdf::ud_quad(p, a, b, c, d),
            ShapeParams::Fractal { iterations, power, bailout } => {
                sdf::sd_fractal(p, iterations, power, bailout, w)
            }
            ShapeParams::Tesseract { half_extents } => sdf::sd_tesseract(p, half_extents, w),
            ShapeParams::HyperSphere { radius } => sdf::sd_hyper_sphere(p, radius, w),
            ShapeParams::DuoCylinder { radii } => sdf::sd_duo_cylinder(p, radii, w),
            ShapeParams::VerticalCapsule { height, radius } => {
                sdf::sd_vertical_capsule(p, height, radius, w)
            }
            ShapeParams::FiveCell { size } => sdf::sd_five_cell(p, size, w),
            ShapeParams::SixteenCell { size } => sdf::sd_sixteen_cell(p, size, w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(values: &[f32]) -> [f32; DIMENSION_SLOTS] {
        let mut out = [0.0; DIMENSION_SLOTS];
        out[..values.len()].copy_from_slice(values);
        out
    }

    #[test]
    fn test_resolve_preserves_kind() {
        let d = dims(&[1.0; DIMENSION_SLOTS]);
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeParams::resolve(kind, &d).kind(), kind);
        }
    }

    #[test]
    fn test_resolve_slot_positions() {
        let d = dims(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        assert_eq!(
            ShapeParams::resolve(ShapeKind::Capsule, &d),
            ShapeParams::Capsule {
                a: Vec3::new(1.0, 2.0, 3.0),
                b: Vec3::new(4.0, 5.0, 6.0),
                radius: 7.0,
            }
        );
        assert_eq!(
            ShapeParams::resolve(ShapeKind::CappedTorus, &d),
            ShapeParams::CappedTorus { ra: 1.0, rb: 2.0, sin_cos: Vec2::new(3.0, 4.0) }
        );
        assert_eq!(
            ShapeParams::resolve(ShapeKind::Quad, &d),
            ShapeParams::Quad {
                a: Vec3::new(1.0, 2.0, 3.0),
                b: Vec3::new(4.0, 5.0, 6.0),
                c: Vec3::new(7.0, 8.0, 9.0),
                d: Vec3::new(10.0, 11.0, 12.0),
            }
        );
        assert_eq!(
            ShapeParams::resolve(ShapeKind::Plane, &d),
            ShapeParams::Plane { normal: Vec3::new(1.0, 2.0, 3.0), offset: 4.0 }
        );
    }

    #[test]
    fn test_unused_slots_ignored() {
        let a = ShapeParams::resolve(ShapeKind::Sphere, &dims(&[2.0]));
        let b = ShapeParams::resolve(ShapeKind::Sphere, &dims(&[2.0, 99.0, -4.0, 7.0]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_box_is_a_cube() {
        let params = ShapeParams::resolve(ShapeKind::Box, &dims(&[1.5]));
        assert_eq!(params.distance(Vec3::new(0.0, 0.0, 1.5), WSlice::ZERO), 0.0);
        assert_eq!(params.distance(Vec3::new(3.0, 0.0, 0.0), WSlice::ZERO), 1.5);
    }

    #[test]
    fn test_three_d_kinds_ignore_w() {
        let d = dims(&[1.0, 0.5, 0.5, 0.5]);
        let w = WSlice::new(3.0, Vec3::new(0.3, 0.2, 0.1));
        let p = Vec3::new(0.4, -0.7, 1.1);
        for kind in ShapeKind::ALL.into_iter().filter(|k| !k.is_four_dimensional()) {
            let params = ShapeParams::resolve(kind, &d);
            let a = params.distance(p, WSlice::ZERO);
            let b = params.distance(p, w);
            assert!(a == b || (a.is_nan() && b.is_nan()), "{:?} depends on w", kind);
        }
    }

    #[test]
    fn test_four_d_kinds_respond_to_w() {
        let params = ShapeParams::resolve(ShapeKind::HyperSphere, &dims(&[1.0]));
        let near = params.distance(Vec3::ZERO, WSlice::ZERO);
        let far = params.distance(Vec3::ZERO, WSlice::new(2.0, Vec3::ZERO));
        assert_eq!(near, -1.0);
        assert_eq!(far, 1.0);
    }
}
