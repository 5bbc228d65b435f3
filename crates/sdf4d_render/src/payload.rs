//! Per-pass packed payload
//!
//! A [`PassPayload`] is built from a [`SceneRegistry`] at the start of a
//! render pass and dropped at its end. It holds the flat record buffer the
//! sampling context reads, plus the uniforms that travel with it.

use sdf4d_core::{
    distance_in_frame, fold_distances, wrap_point, DistanceSample, ObjectKey, Operation,
    Placement, SceneRegistry, ShapeKind, Vec3,
};

use crate::types::{PassUniforms, ShapeRecord};

/// Record buffer, uniforms, and the object key behind each record
#[derive(Clone, Debug)]
pub struct PassPayload {
    records: Vec<ShapeRecord>,
    keys: Vec<ObjectKey>,
    uniforms: PassUniforms,
    far_distance: f32,
}

impl PassPayload {
    /// Pack every registry entry, in order
    ///
    /// `base` supplies the march and lighting settings; the observer, tiling
    /// period and count are taken from the registry.
    pub fn build(registry: &SceneRegistry, base: &PassUniforms) -> Self {
        let observer = &registry.observer;
        let records: Vec<ShapeRecord> = registry
            .entries
            .iter()
            .map(|e| ShapeRecord::pack(&e.primitive, observer))
            .collect();
        let keys = registry.entries.iter().map(|e| e.key).collect();

        let uniforms = PassUniforms {
            observer_w_rot: observer.w_rot.to_array(),
            observer_w_pos: observer.w_pos,
            loop_period: registry.loop_period.to_array(),
            shape_count: records.len() as u32,
            ..*base
        };

        log::debug!(
            "Built pass payload: {} records, {} bytes",
            records.len(),
            std::mem::size_of_val(records.as_slice())
        );

        Self {
            records,
            keys,
            uniforms,
            far_distance: registry.far_distance,
        }
    }

    /// The packed records
    pub fn records(&self) -> &[ShapeRecord] {
        &self.records
    }

    /// The pass uniforms
    pub fn uniforms(&self) -> &PassUniforms {
        &self.uniforms
    }

    /// Record buffer as raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.records)
    }

    /// Uniforms as raw bytes for upload
    pub fn uniform_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.uniforms)
    }

    /// Number of records
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the payload holds no records
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Object key behind record `index`
    pub fn key_of(&self, index: usize) -> Option<ObjectKey> {
        self.keys.get(index).copied()
    }

    /// Evaluate the scene at `point` from the packed records alone
    ///
    /// Record indices that name no shape evaluate to the far sentinel.
    /// Records with an unknown operation index are skipped, leaving both the
    /// running distance and the controlling record untouched.
    pub fn evaluate(&self, point: Vec3) -> DistanceSample<usize> {
        let mut p = point;
        wrap_point(&mut p, Vec3::from(self.uniforms.loop_period));

        fold_distances(self.records.iter().enumerate().filter_map(|(i, r)| {
            let op = Operation::from_index(r.op_index)?;
            let placement = Placement::new(
                Vec3::from(r.pos),
                Vec3::from(r.rot),
                r.pos_w,
                Vec3::from(r.rot_w),
            );
            let delta = distance_in_frame(
                ShapeKind::from_index(r.shape_index),
                &r.dimensions,
                &placement,
                p,
                self.far_distance,
            );
            Some((i, op, delta))
        }))
    }

    /// Map a record-indexed sample back to object keys
    pub fn resolve(&self, sample: DistanceSample<usize>) -> DistanceSample<ObjectKey> {
        DistanceSample {
            distance: sample.distance,
            controlling: sample.controlling.and_then(|i| self.key_of(i)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SHAPE_RECORD_SIZE;
    use sdf4d_core::{evaluate_scene, Observer, Primitive, ShapeWorld};

    fn mixed_world() -> ShapeWorld {
        let mut world = ShapeWorld::new();
        world.add_primitive(Primitive::new(ShapeKind::Plane, &[0.0, 1.0, 0.0, 1.0]));
        world.add_primitive(
            Primitive::new(ShapeKind::Torus, &[1.5, 0.3])
                .at(Vec3::new(0.5, 0.5, -0.5))
                .with_rotation(Vec3::new(30.0, 45.0, 10.0)),
        );
        world.add_primitive(
            Primitive::new(ShapeKind::Tesseract, &[0.8, 0.8, 0.8, 0.6])
                .at(Vec3::new(-1.0, 0.2, 0.3))
                .with_w(0.4, Vec3::new(20.0, -35.0, 50.0)),
        );
        world.add_primitive(
            Primitive::new(ShapeKind::Sphere, &[0.7])
                .at(Vec3::new(-1.0, 0.5, 0.3))
                .with_operation(Operation::Subtract),
        );
        world
    }

    #[test]
    fn test_host_and_payload_agree() {
        let world = mixed_world();
        let observer = Observer::new(0.3, Vec3::new(5.0, 10.0, -15.0));
        let registry = SceneRegistry::snapshot(&world, observer, Vec3::new(6.0, 0.0, 0.0));
        let payload = PassPayload::build(&registry, &PassUniforms::default());

        for i in 0..50 {
            let t = i as f32 * 0.37;
            let p = Vec3::new(t.sin() * 4.0 + t, t.cos() * 2.0, (t * 1.3).sin() * 3.0);
            let host = evaluate_scene(&registry, p);
            let packed = payload.resolve(payload.evaluate(p));
            assert_eq!(host.distance.to_bits(), packed.distance.to_bits(), "at {:?}", p);
            assert_eq!(host.controlling, packed.controlling, "at {:?}", p);
        }
    }

    #[test]
    fn test_uniforms_follow_registry() {
        let world = mixed_world();
        let observer = Observer::new(2.0, Vec3::new(0.0, 90.0, 0.0));
        let registry = SceneRegistry::snapshot(&world, observer, Vec3::new(4.0, 0.0, 8.0));
        let base = PassUniforms { max_steps: 64.0, ..PassUniforms::default() };
        let payload = PassPayload::build(&registry, &base);

        let u = payload.uniforms();
        assert_eq!(u.shape_count, 4);
        assert_eq!(u.observer_w_pos, 2.0);
        assert_eq!(u.observer_w_rot, [0.0, 90.0, 0.0]);
        assert_eq!(u.loop_period, [4.0, 0.0, 8.0]);
        assert_eq!(u.max_steps, 64.0);
    }

    #[test]
    fn test_byte_views() {
        let registry = SceneRegistry::snapshot(&mixed_world(), Observer::default(), Vec3::ZERO);
        let payload = PassPayload::build(&registry, &PassUniforms::default());
        assert_eq!(payload.as_bytes().len(), 4 * SHAPE_RECORD_SIZE);
        assert_eq!(payload.uniform_bytes().len(), std::mem::size_of::<PassUniforms>());
    }

    #[test]
    fn test_unknown_shape_index_is_far() {
        let mut world = ShapeWorld::new();
        let key = world.add_primitive(Primitive::new(ShapeKind::Sphere, &[1.0]));
        let registry = SceneRegistry::snapshot(&world, Observer::default(), Vec3::ZERO)
            .with_far_distance(500.0);
        let mut payload = PassPayload::build(&registry, &PassUniforms::default());
        payload.records[0].shape_index = 99;

        let sample = payload.evaluate(Vec3::ZERO);
        assert_eq!(sample.distance, 500.0);
        // It still set the running value, so it still controls
        assert_eq!(payload.resolve(sample).controlling, Some(key));
    }

    #[test]
    fn test_unknown_operation_index_is_skipped() {
        let mut world = ShapeWorld::new();
        world.add_primitive(Primitive::new(ShapeKind::Sphere, &[1.0]));
        let registry = SceneRegistry::snapshot(&world, Observer::default(), Vec3::ZERO);
        let mut payload = PassPayload::build(&registry, &PassUniforms::default());
        payload.records[0].op_index = 99;

        let sample = payload.evaluate(Vec3::ZERO);
        assert_eq!(sample.distance, f32::INFINITY);
        assert_eq!(sample.controlling, None);
    }

    #[test]
    fn test_unknown_operation_between_valid_records() {
        let mut world = ShapeWorld::new();
        let floor = world.add_primitive(Primitive::new(ShapeKind::Plane, &[0.0, 1.0, 0.0, 1.0]));
        world.add_primitive(Primitive::new(ShapeKind::Sphere, &[2.0]));
        let registry = SceneRegistry::snapshot(&world, Observer::default(), Vec3::ZERO);
        let mut payload = PassPayload::build(&registry, &PassUniforms::default());
        payload.records[1].op_index = -1;

        let sample = payload.resolve(payload.evaluate(Vec3::ZERO));
        assert_eq!(sample.distance, 1.0);
        assert_eq!(sample.controlling, Some(floor));
    }

    #[test]
    fn test_empty_payload() {
        let payload = PassPayload::build(&SceneRegistry::default(), &PassUniforms::default());
        assert!(payload.is_empty());
        assert!(payload.as_bytes().is_empty());
        let sample = payload.evaluate(Vec3::ZERO);
        assert_eq!(sample.distance, f32::INFINITY);
        assert_eq!(sample.controlling, None);
    }
}
