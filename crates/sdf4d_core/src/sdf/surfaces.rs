//! Unsigned distances to flat polygons

use sdf4d_math::{dot2_3, Vec3};

use super::sign;

/// Squared distance from `p` (given as `p - start`) to the segment `edge`
#[inline]
fn edge_distance_squared(edge: Vec3, from_start: Vec3) -> f32 {
    let t = (edge.dot(from_start) / dot2_3(edge)).clamp(0.0, 1.0);
    dot2_3(edge * t - from_start)
}

/// Squared distance from `p` to the plane through `a` with normal `nor`
#[inline]
fn plane_distance_squared(nor: Vec3, pa: Vec3) -> f32 {
    let d = nor.dot(pa);
    d * d / dot2_3(nor)
}

/// Unsigned distance to the triangle `a`, `b`, `c`
pub fn ud_triangle(p: Vec3, a: Vec3, b: Vec3, c: Vec3) -> f32 {
    let ba = b - a;
    let pa = p - a;
    let cb = c - b;
    let pb = p - b;
    let ac = a - c;
    let pc = p - c;
    let nor = ba.cross(ac);

    let inside = sign(ba.cross(nor).dot(pa))
        + sign(cb.cross(nor).dot(pb))
        + sign(ac.cross(nor).dot(pc));

    let d2 = if inside < 2.0 {
        edge_distance_squared(ba, pa)
            .min(edge_distance_squared(cb, pb))
            .min(edge_distance_squared(ac, pc))
    } else {
        plane_distance_squared(nor, pa)
    };
    d2.sqrt()
}

/// Unsigned distance to the planar quad `a`, `b`, `c`, `d`
pub fn ud_quad(p: Vec3, a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> f32 {
    let ba = b - a;
    let pa = p - a;
    let cb = c - b;
    let pb = p - b;
    let dc = d - c;
    let pc = p - c;
    let ad = a - d;
    let pd = p - d;
    let nor = ba.cross(ad);

    let inside = sign(ba.cross(nor).dot(pa))
        + sign(cb.cross(nor).dot(pb))
        + sign(dc.cross(nor).dot(pc))
        + sign(ad.cross(nor).dot(pd));

    let d2 = if inside < 3.0 {
        edge_distance_squared(ba, pa)
            .min(edge_distance_squared(cb, pb))
            .min(edge_distance_squared(dc, pc))
            .min(edge_distance_squared(ad, pd))
    } else {
        plane_distance_squared(nor, pa)
    };
    d2.sqrt()
}
