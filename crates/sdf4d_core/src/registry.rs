//! Per-pass snapshot of the scene
//!
//! A [`SceneRegistry`] is rebuilt from the [`ShapeWorld`] at the start of
//! every pass and is not modified afterwards. Objects added or removed
//! between passes show up in the next snapshot automatically.

use sdf4d_math::Vec3;

use crate::field::DEFAULT_FAR_DISTANCE;
use crate::primitive::{Observer, Primitive};
use crate::world::{ObjectKey, ShapeWorld};

/// One primitive in a registry, with the key of the object it came from
#[derive(Clone, Debug, PartialEq)]
pub struct RegistryEntry {
    pub key: ObjectKey,
    pub primitive: Primitive,
}

/// Ordered primitives plus the pass-wide settings they are evaluated with
#[derive(Clone, Debug, PartialEq)]
pub struct SceneRegistry {
    /// Primitives in world creation order
    pub entries: Vec<RegistryEntry>,
    /// Tiling period per axis; zero leaves that axis unwrapped
    pub loop_period: Vec3,
    /// Observer pose for this pass
    pub observer: Observer,
    /// Distance reported for primitives whose shape cannot be resolved
    pub far_distance: f32,
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            loop_period: Vec3::ZERO,
            observer: Observer::default(),
            far_distance: DEFAULT_FAR_DISTANCE,
        }
    }
}

impl SceneRegistry {
    /// Capture every live object in `world`, in creation order
    pub fn snapshot(world: &ShapeWorld, observer: Observer, loop_period: Vec3) -> Self {
        let entries: Vec<RegistryEntry> = world
            .iter()
            .map(|(key, object)| RegistryEntry {
                key,
                primitive: object.primitive.clone(),
            })
            .collect();

        log::debug!(
            "Registry snapshot: {} primitives, observer w={} rot={:?}, loop={:?}",
            entries.len(),
            observer.w_pos,
            observer.w_rot,
            loop_period
        );

        Self {
            entries,
            loop_period,
            observer,
            ..Self::default()
        }
    }

    /// Override the far-distance sentinel
    pub fn with_far_distance(mut self, far_distance: f32) -> Self {
        self.far_distance = far_distance;
        self
    }

    /// Number of primitives in the snapshot
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the snapshot holds no primitives
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the primitive captured for `key`
    pub fn get(&self, key: ObjectKey) -> Option<&Primitive> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.primitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    #[test]
    fn test_snapshot_copies_in_order() {
        let mut world = ShapeWorld::new();
        let a = world.add_primitive(Primitive::new(ShapeKind::Sphere, &[1.0]));
        let b = world.add_primitive(Primitive::new(ShapeKind::Box, &[2.0]));
        let registry = SceneRegistry::snapshot(&world, Observer::default(), Vec3::ZERO);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entries[0].key, a);
        assert_eq!(registry.entries[1].key, b);
        assert_eq!(registry.far_distance, DEFAULT_FAR_DISTANCE);
    }

    #[test]
    fn test_snapshot_is_detached_from_world() {
        let mut world = ShapeWorld::new();
        let key = world.add_primitive(Primitive::new(ShapeKind::Sphere, &[1.0]));
        let registry = SceneRegistry::snapshot(&world, Observer::default(), Vec3::ZERO);

        if let Some(object) = world.get_mut(key) {
            object.primitive.dimensions[0] = 5.0;
        }
        world.remove_object(key);

        assert_eq!(registry.get(key).map(|p| p.dimensions[0]), Some(1.0));
        let next = SceneRegistry::snapshot(&world, Observer::default(), Vec3::ZERO);
        assert!(next.is_empty());
    }

    #[test]
    fn test_with_far_distance() {
        let registry = SceneRegistry::default().with_far_distance(50.0);
        assert_eq!(registry.far_distance, 50.0);
        assert!(registry.is_empty());
    }
}
