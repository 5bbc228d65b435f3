//! Scene-wide combination of primitive distances
//!
//! The query point is first wrapped into the tiling cell, then every
//! primitive's distance is folded into a running value with its own
//! [`Operation`]. The fold also records which primitive is "controlling"
//! the result.

use sdf4d_math::Vec3;

use crate::field::evaluate_one;
use crate::registry::SceneRegistry;
use crate::shape::Operation;
use crate::world::ObjectKey;

/// Combined distance at a point and the primitive it is attributed to
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceSample<K> {
    /// Signed scene distance; negative inside the combined solid
    pub distance: f32,
    /// Attributed primitive, `None` when nothing set the running value
    pub controlling: Option<K>,
}

impl<K> DistanceSample<K> {
    /// Result for a scene with no primitives
    pub const EMPTY: Self = Self {
        distance: f32::INFINITY,
        controlling: None,
    };

    /// Whether the point lies strictly inside the scene
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.distance < 0.0
    }
}

/// Reduce one coordinate into the centred cell of width `period`
///
/// Returns the index of the cell the coordinate started in. A zero period
/// leaves the coordinate alone and reports cell 0.
///
/// The remainder is applied twice with a negation in between, using the
/// truncating `%`. The result is the mirror image of the plain centred
/// remainder, which is equivalent for the symmetric tiling this drives and
/// stays consistent for negative inputs.
pub fn wrap_axis(coord: &mut f32, period: f32) -> f32 {
    if period == 0.0 {
        return 0.0;
    }
    let h = period * 0.5;
    let cell = ((*coord + h) / period).floor();
    *coord = (*coord + h) % period - h;
    *coord = (-*coord + h) % period - h;
    cell
}

/// Wrap every axis with a non-zero period, returning the per-axis cells
pub fn wrap_point(point: &mut Vec3, period: Vec3) -> Vec3 {
    Vec3::new(
        wrap_axis(&mut point.x, period.x),
        wrap_axis(&mut point.y, period.y),
        wrap_axis(&mut point.z, period.z),
    )
}

/// Fold per-primitive distances into a scene sample
///
/// Starts from `+inf`. For each `(key, operation, delta)` the running value
/// becomes `operation.apply(previous, delta)`. A union takes control when
/// `delta` is strictly below the previous running value; intersect and
/// subtract take control when `delta` is strictly below the combined value.
/// Ties keep the earlier primitive.
pub fn fold_distances<K, I>(distances: I) -> DistanceSample<K>
where
    I: IntoIterator<Item = (K, Operation, f32)>,
{
    distances
        .into_iter()
        .fold(DistanceSample::EMPTY, |acc, (key, op, delta)| {
            let previous = acc.distance;
            let distance = op.apply(previous, delta);
            let takes_control = match op {
                Operation::Union => delta < previous,
                Operation::Intersect | Operation::Subtract => delta < distance,
            };
            DistanceSample {
                distance,
                controlling: if takes_control { Some(key) } else { acc.controlling },
            }
        })
}

/// Evaluate the whole registry at `world_point`
pub fn evaluate_scene(registry: &SceneRegistry, world_point: Vec3) -> DistanceSample<ObjectKey> {
    let mut p = world_point;
    wrap_point(&mut p, registry.loop_period);

    fold_distances(registry.entries.iter().map(|entry| {
        (
            entry.key,
            entry.primitive.operation,
            evaluate_one(&entry.primitive, p, &registry.observer),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{Observer, Primitive};
    use crate::shape::ShapeKind;
    use crate::world::ShapeWorld;

    const EPSILON: f32 = 1e-5;

    fn registry_of(primitives: Vec<Primitive>, loop_period: Vec3) -> (SceneRegistry, Vec<ObjectKey>) {
        let mut world = ShapeWorld::new();
        let keys = primitives.into_iter().map(|p| world.add_primitive(p)).collect();
        (SceneRegistry::snapshot(&world, Observer::default(), loop_period), keys)
    }

    #[test]
    fn test_empty_registry() {
        let sample = evaluate_scene(&SceneRegistry::default(), Vec3::ZERO);
        assert_eq!(sample.distance, f32::INFINITY);
        assert_eq!(sample.controlling, None);
        assert!(!sample.is_inside());
    }

    #[test]
    fn test_single_sphere_scenario() {
        let (registry, keys) = registry_of(vec![Primitive::new(ShapeKind::Sphere, &[2.0])], Vec3::ZERO);

        let centre = evaluate_scene(&registry, Vec3::ZERO);
        assert_eq!(centre.distance, -2.0);
        assert_eq!(centre.controlling, Some(keys[0]));

        assert_eq!(evaluate_scene(&registry, Vec3::new(3.0, 0.0, 0.0)).distance, 1.0);
        assert_eq!(evaluate_scene(&registry, Vec3::new(2.0, 0.0, 0.0)).distance, 0.0);
    }

    #[test]
    fn test_tie_keeps_first_primitive() {
        let (registry, keys) = registry_of(
            vec![
                Primitive::new(ShapeKind::Box, &[1.0]).at(Vec3::new(-1.5, 0.0, 0.0)),
                Primitive::new(ShapeKind::Box, &[1.0]).at(Vec3::new(1.5, 0.0, 0.0)),
            ],
            Vec3::ZERO,
        );
        let sample = evaluate_scene(&registry, Vec3::ZERO);
        assert!((sample.distance - 0.5).abs() < EPSILON);
        assert_eq!(sample.controlling, Some(keys[0]));
    }

    #[test]
    fn test_union_commutes() {
        let a = Primitive::new(ShapeKind::Sphere, &[1.0]).at(Vec3::new(-1.0, 0.0, 0.0));
        let b = Primitive::new(ShapeKind::Torus, &[1.5, 0.25]).at(Vec3::new(0.5, 0.3, 0.0));
        let (ab, _) = registry_of(vec![a.clone(), b.clone()], Vec3::ZERO);
        let (ba, _) = registry_of(vec![b, a], Vec3::ZERO);
        for p in [Vec3::ZERO, Vec3::new(2.0, 1.0, -0.5), Vec3::new(-1.2, 0.0, 0.1)] {
            assert_eq!(evaluate_scene(&ab, p).distance, evaluate_scene(&ba, p).distance);
        }
    }

    #[test]
    fn test_subtract_depends_on_order() {
        let big = Primitive::new(ShapeKind::Sphere, &[2.0]);
        let small = Primitive::new(ShapeKind::Sphere, &[1.0]).with_operation(Operation::Subtract);
        let (small_minus_big, _) = registry_of(vec![big.clone(), small.clone()], Vec3::ZERO);
        let (big_minus_small, _) = registry_of(
            vec![small, big.with_operation(Operation::Subtract)],
            Vec3::ZERO,
        );

        // Small minus big leaves nothing near the centre
        let p = Vec3::ZERO;
        let d1 = evaluate_scene(&small_minus_big, p).distance;
        assert_eq!(d1, 2.0);
        // Big minus small is a hollow shell one unit from the centre
        let d2 = evaluate_scene(&big_minus_small, p).distance;
        assert_eq!(d2, 1.0);
    }

    #[test]
    fn test_intersect() {
        let (registry, _) = registry_of(
            vec![
                Primitive::new(ShapeKind::Sphere, &[2.0]),
                Primitive::new(ShapeKind::Box, &[1.0]).with_operation(Operation::Intersect),
            ],
            Vec3::ZERO,
        );
        // Inside both: the less negative one wins
        assert_eq!(evaluate_scene(&registry, Vec3::ZERO).distance, -1.0);
    }

    #[test]
    fn test_wrap_axis_values() {
        let mut x = 0.5;
        assert_eq!(wrap_axis(&mut x, 4.0), 0.0);
        assert_eq!(x, -0.5);

        let mut x = 12.5;
        assert_eq!(wrap_axis(&mut x, 4.0), 3.0);
        assert_eq!(x, -0.5);

        let mut x = -3.5;
        assert_eq!(wrap_axis(&mut x, 4.0), -1.0);
        assert_eq!(x, -0.5);
    }

    #[test]
    fn test_zero_period_leaves_axis() {
        let mut p = Vec3::new(7.0, -9.0, 1.0);
        let cells = wrap_point(&mut p, Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(p.x, 7.0);
        assert_eq!(p.y, -9.0);
        assert_eq!(cells, Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_wrap_round_trip() {
        let (registry, _) = registry_of(
            vec![Primitive::new(ShapeKind::Sphere, &[1.0]).at(Vec3::new(0.25, 0.0, 0.0))],
            Vec3::new(4.0, 0.0, 0.0),
        );
        let base = evaluate_scene(&registry, Vec3::new(0.5, 0.2, 0.0)).distance;
        for n in [-3.0, -1.0, 1.0, 3.0] {
            let shifted = evaluate_scene(&registry, Vec3::new(0.5 + n * 4.0, 0.2, 0.0)).distance;
            assert_eq!(base, shifted, "cell {}", n);
        }
    }

    #[test]
    fn test_fold_generic_keys() {
        let sample = fold_distances([
            (0usize, Operation::Union, 3.0),
            (1, Operation::Union, 1.0),
            (2, Operation::Union, 2.0),
        ]);
        assert_eq!(sample.distance, 1.0);
        assert_eq!(sample.controlling, Some(1));
    }

    #[test]
    fn test_fold_attribution_after_combining() {
        // Subtract: max(-1.0, 0.5) = 0.5 and 0.5 is not below it, control stays
        let sample = fold_distances([
            ("a", Operation::Union, 1.0),
            ("b", Operation::Subtract, 0.5),
        ]);
        assert_eq!(sample.distance, 0.5);
        assert_eq!(sample.controlling, Some("a"));

        // Subtract: max(-3.0, -4.0) = -3.0, so the deeper delta takes control
        let sample = fold_distances([
            ("a", Operation::Union, 3.0),
            ("b", Operation::Subtract, -4.0),
        ]);
        assert_eq!(sample.distance, -3.0);
        assert_eq!(sample.controlling, Some("b"));

        // Intersect: delta 2.0 is not below 1.0, control stays
        let sample = fold_distances([
            ("a", Operation::Union, 1.0),
            ("b", Operation::Intersect, 2.0),
        ]);
        assert_eq!(sample.distance, 2.0);
        assert_eq!(sample.controlling, Some("a"));

        // Intersect: delta 0.5 is below max(1.0, 0.5)
        let sample = fold_distances([
            ("a", Operation::Union, 1.0),
            ("b", Operation::Intersect, 0.5),
        ]);
        assert_eq!(sample.distance, 1.0);
        assert_eq!(sample.controlling, Some("b"));
    }

    #[test]
    fn test_leading_subtract_has_no_control() {
        let sample = fold_distances([("a", Operation::Subtract, 0.5)]);
        assert_eq!(sample.distance, 0.5);
        assert_eq!(sample.controlling, None);
    }

    #[test]
    fn test_carving_block_leaves_control_with_hollow() {
        // max(-2.6, -1.0) = -1.0 is not above the block's own delta
        let sample = fold_distances([
            ("sphere", Operation::Union, 2.6),
            ("block", Operation::Subtract, -1.0),
        ]);
        assert_eq!(sample.distance, -1.0);
        assert_eq!(sample.controlling, Some("sphere"));
    }
}
