//! Boxes, polyhedra, tori and prisms

use sdf4d_math::{ndot, Vec2, Vec3};

use super::sign;

/// Sphere of radius `r` centred at the origin
#[inline]
pub fn sd_sphere(p: Vec3, r: f32) -> f32 {
    p.length() - r
}

/// Axis-aligned box with half extents `b`
pub fn sd_box(p: Vec3, b: Vec3) -> f32 {
    let q = p.abs() - b;
    q.max_zero().length() + q.max_element().min(0.0)
}

/// Box with half extents `b` whose edges are rounded by `r`
pub fn sd_round_box(p: Vec3, b: Vec3, r: f32) -> f32 {
    let q = p.abs() - b + Vec3::splat(r);
    q.max_zero().length() + q.max_element().min(0.0) - r
}

/// Hollow box keeping only its twelve edges, each of thickness `e`
pub fn sd_box_frame(p: Vec3, b: Vec3, e: f32) -> f32 {
    let p = p.abs() - b;
    let q = (p + Vec3::splat(e)).abs() - Vec3::splat(e);
    let edge = |v: Vec3| v.max_zero().length() + v.max_element().min(0.0);
    edge(Vec3::new(p.x, q.y, q.z))
        .min(edge(Vec3::new(q.x, p.y, q.z)))
        .min(edge(Vec3::new(q.x, q.y, p.z)))
}

/// Ellipsoid with radii `r`
///
/// This is a bound, not an exact distance. The centre is special-cased to
/// avoid a 0/0.
pub fn sd_ellipsoid(p: Vec3, r: Vec3) -> f32 {
    let k1 = p.component_div(r.component_mul(r)).length();
    if k1 == 0.0 {
        return -r.min_element();
    }
    let k0 = p.component_div(r).length();
    k0 * (k0 - 1.0) / k1
}

/// Regular octahedron with vertices at distance `s` along each axis
pub fn sd_octahedron(p: Vec3, s: f32) -> f32 {
    let p = p.abs();
    let m = p.x + p.y + p.z - s;
    let q = if 3.0 * p.x < m {
        p
    } else if 3.0 * p.y < m {
        Vec3::new(p.y, p.z, p.x)
    } else if 3.0 * p.z < m {
        Vec3::new(p.z, p.x, p.y)
    } else {
        return m * 0.577_350_27;
    };
    let k = (0.5 * (q.z - q.y + s)).clamp(0.0, s);
    Vec3::new(q.x, q.y - s + k, q.z - k).length()
}

/// Square pyramid of height `h` on a unit base centred at the origin
pub fn sd_pyramid(p: Vec3, h: f32) -> f32 {
    let m2 = h * h + 0.25;

    let (mut px, mut pz) = (p.x.abs(), p.z.abs());
    if pz > px {
        std::mem::swap(&mut px, &mut pz);
    }
    px -= 0.5;
    pz -= 0.5;

    let q = Vec3::new(pz, h * p.y - 0.5 * px, h * px + 0.5 * p.y);

    let s = (-q.x).max(0.0);
    let t = ((q.y - 0.5 * pz) / (m2 + 0.25)).clamp(0.0, 1.0);

    let a = m2 * (q.x + s) * (q.x + s) + q.y * q.y;
    let b = m2 * (q.x + 0.5 * t) * (q.x + 0.5 * t) + (q.y - m2 * t) * (q.y - m2 * t);

    let d2 = if q.y.min(-q.x * m2 - q.y * 0.5) > 0.0 { 0.0 } else { a.min(b) };

    ((d2 + q.z * q.z) / m2).sqrt() * sign(q.z.max(-p.y))
}

/// Plane `p·n + h = 0`; `n` is expected to be unit length
#[inline]
pub fn sd_plane(p: Vec3, n: Vec3, h: f32) -> f32 {
    p.dot(n) + h
}

/// Torus in the XZ plane with `t = (major radius, minor radius)`
pub fn sd_torus(p: Vec3, t: Vec2) -> f32 {
    let q = Vec2::new(p.xz().length() - t.x, p.y);
    q.length() - t.y
}

/// Torus arc opening along +Y; `sc` is (sin, cos) of the half aperture
pub fn sd_capped_torus(p: Vec3, sc: Vec2, ra: f32, rb: f32) -> f32 {
    let p = Vec3::new(p.x.abs(), p.y, p.z);
    let k = if sc.y * p.x > sc.x * p.y {
        p.xy().dot(sc)
    } else {
        p.xy().length()
    };
    (p.dot(p) + ra * ra - 2.0 * ra * k).sqrt() - rb
}

/// Chain link: a torus stretched by `le` along Y
pub fn sd_link(p: Vec3, le: f32, r1: f32, r2: f32) -> f32 {
    let q = Vec3::new(p.x, (p.y.abs() - le).max(0.0), p.z);
    Vec2::new(q.xy().length() - r1, q.z).length() - r2
}

/// Hexagonal prism along Z with `h = (apothem, half length)`
pub fn sd_hex_prism(p: Vec3, h: Vec2) -> f32 {
    const K: Vec3 = Vec3::new(-0.866_025_4, 0.5, 0.577_35);
    let mut p = p.abs();
    let kxy = K.xy();
    let fold = 2.0 * kxy.dot(p.xy()).min(0.0);
    p.x -= fold * kxy.x;
    p.y -= fold * kxy.y;
    let d = Vec2::new(
        (p.xy() - Vec2::new(p.x.clamp(-K.z * h.x, K.z * h.x), h.x)).length() * sign(p.y - h.x),
        p.z - h.y,
    );
    d.x.max(d.y).min(0.0) + d.max_zero().length()
}

/// Triangular prism along Z with `h = (size, half length)`
///
/// A bound rather than an exact distance.
pub fn sd_tri_prism(p: Vec3, h: Vec2) -> f32 {
    let q = p.abs();
    (q.z - h.y).max((q.x * 0.866_025 + p.y * 0.5).max(-p.y) - h.x * 0.5)
}

/// Rhombus in XZ with diagonals `la`, `lb`, half height `h` and rounding `ra`
pub fn sd_rhombus(p: Vec3, la: f32, lb: f32, h: f32, ra: f32) -> f32 {
    let p = p.abs();
    let b = Vec2::new(la, lb);
    let f = (ndot(b, b - 2.0 * p.xz()) / b.dot(b)).clamp(-1.0, 1.0);
    let q = Vec2::new(
        (p.xz() - 0.5 * b.component_mul(Vec2::new(1.0 - f, 1.0 + f))).length()
            * sign(p.x * b.y + p.z * b.x - b.x * b.y)
            - ra,
        p.y - h,
    );
    q.x.max(q.y).min(0.0) + q.max_zero().length()
}
