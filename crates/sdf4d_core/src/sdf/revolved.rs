//! Shapes of revolution around the Y axis, plus capsules and cylinders
//!
//! Most of these reduce the point to a 2D profile `q = (|p.xz|, p.y)` and
//! measure against a 2D outline.

use sdf4d_math::{dot2, Vec2, Vec3};

use super::sign;

#[inline]
fn profile(p: Vec3) -> Vec2 {
    Vec2::new(p.xz().length(), p.y)
}

/// Cone with its tip at the origin opening downward to height `h`
///
/// `c` is (sin, cos) of the half angle.
pub fn sd_cone(p: Vec3, c: Vec2, h: f32) -> f32 {
    let q = h * Vec2::new(c.x / c.y, -1.0);
    let w = profile(p);
    let a = w - q * (w.dot(q) / q.dot(q)).clamp(0.0, 1.0);
    let b = w - q.component_mul(Vec2::new((w.x / q.x).clamp(0.0, 1.0), 1.0));
    let k = sign(q.y);
    let d = a.dot(a).min(b.dot(b));
    let s = (k * (w.x * q.y - w.y * q.x)).max(k * (w.y - q.y));
    d.sqrt() * sign(s)
}

/// Infinite cone with its tip at the origin opening downward
///
/// `c` is (sin, cos) of the half angle.
pub fn sd_inf_cone(p: Vec3, c: Vec2) -> f32 {
    let q = Vec2::new(p.xz().length(), -p.y);
    let d = (q - c * q.dot(c).max(0.0)).length();
    if q.x * c.y - q.y * c.x < 0.0 {
        -d
    } else {
        d
    }
}

/// Capsule around the segment `a`-`b` with radius `r`
pub fn sd_capsule(p: Vec3, a: Vec3, b: Vec3, r: f32) -> f32 {
    let pa = p - a;
    let ba = b - a;
    let h = (pa.dot(ba) / ba.dot(ba)).clamp(0.0, 1.0);
    (pa - ba * h).length() - r
}

/// Infinite cylinder along Y; `c.xy` is the centre in XZ, `c.z` the radius
pub fn sd_infinite_cylinder(p: Vec3, c: Vec3) -> f32 {
    (p.xz() - c.xy()).length() - c.z
}

/// Cylinder of radius `2*ra` and half height `h + rb` with edges rounded by `rb`
pub fn sd_rounded_cylinder(p: Vec3, ra: f32, rb: f32, h: f32) -> f32 {
    let d = Vec2::new(p.xz().length() - 2.0 * ra + rb, p.y.abs() - h);
    d.x.max(d.y).min(0.0) + d.max_zero().length() - rb
}

/// Truncated cone of half height `h`, bottom radius `r1`, top radius `r2`
pub fn sd_capped_cone(p: Vec3, h: f32, r1: f32, r2: f32) -> f32 {
    let q = profile(p);
    let k1 = Vec2::new(r2, h);
    let k2 = Vec2::new(r2 - r1, 2.0 * h);
    let ca = Vec2::new(
        q.x - q.x.min(if q.y < 0.0 { r1 } else { r2 }),
        q.y.abs() - h,
    );
    let cb = q - k1 + k2 * ((k1 - q).dot(k2) / dot2(k2)).clamp(0.0, 1.0);
    let s = if cb.x < 0.0 && ca.y < 0.0 { -1.0 } else { 1.0 };
    s * dot2(ca).min(dot2(cb)).sqrt()
}

/// Spherical sector of radius `ra`; `c` is (sin, cos) of the half angle
pub fn sd_solid_angle(p: Vec3, c: Vec2, ra: f32) -> f32 {
    let q = profile(p);
    let l = q.length() - ra;
    let m = (q - c * q.dot(c).clamp(0.0, ra)).length();
    l.max(m * sign(c.y * q.x - c.x * q.y))
}

/// Sphere of radius `r` with everything below height `h` removed
pub fn sd_cut_sphere(p: Vec3, r: f32, h: f32) -> f32 {
    let w = (r * r - h * h).sqrt();
    let q = profile(p);
    let s = ((h - r) * q.x * q.x + w * w * (h + r - 2.0 * q.y)).max(h * q.x - w * q.y);
    if s < 0.0 {
        q.length() - r
    } else if q.x < w {
        h - q.y
    } else {
        (q - Vec2::new(w, h)).length()
    }
}

/// Spherical shell of radius `r` and thickness `t`, cut open above height `h`
pub fn sd_cut_hollow_sphere(p: Vec3, r: f32, h: f32, t: f32) -> f32 {
    let w = (r * r - h * h).sqrt();
    let q = profile(p);
    let d = if h * q.x < w * q.y {
        (q - Vec2::new(w, h)).length()
    } else {
        (q.length() - r).abs()
    };
    d - t
}

/// Sphere of radius `ra` with a bite of radius `rb` taken at distance `d` along X
pub fn sd_death_star(p: Vec3, ra: f32, rb: f32, d: f32) -> f32 {
    let a = (ra * ra - rb * rb + d * d) / (2.0 * d);
    let b = (ra * ra - a * a).max(0.0).sqrt();
    let q = Vec2::new(p.x, p.yz().length());
    if q.x * b - q.y * a > d * (b - q.y).max(0.0) {
        (q - Vec2::new(a, b)).length()
    } else {
        (q.length() - ra).max(-((q - Vec2::new(d, 0.0)).length() - rb))
    }
}

/// Cone with spherical ends: radius `r1` at the origin, `r2` at height `h`
pub fn sd_round_cone(p: Vec3, r1: f32, r2: f32, h: f32) -> f32 {
    let b = (r1 - r2) / h;
    let a = (1.0 - b * b).sqrt();
    let q = profile(p);
    let k = q.dot(Vec2::new(-b, a));
    if k < 0.0 {
        return q.length() - r1;
    }
    if k > a * h {
        return (q - Vec2::new(0.0, h)).length() - r2;
    }
    q.dot(Vec2::new(a, b)) - r1
}
