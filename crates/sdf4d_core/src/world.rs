//! World container for shape objects
//!
//! The ShapeWorld is the authoritative, editable set of primitives. The
//! evaluator never reads it directly; each pass takes a
//! [`SceneRegistry`](crate::SceneRegistry) snapshot of it instead.

use slotmap::{new_key_type, SlotMap};

use crate::primitive::Primitive;

new_key_type! {
    /// Key to a shape object in the world
    ///
    /// Uses generational indexing, so a key to a removed object returns
    /// None instead of aliasing whatever later reuses its slot.
    pub struct ObjectKey;
}

/// A named, tagged primitive living in the world
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeObject {
    /// Optional name for lookup
    pub name: Option<String>,
    /// Tags for categorization (e.g. "static", "hazard")
    pub tags: Vec<String>,
    /// The primitive itself
    pub primitive: Primitive,
}

impl ShapeObject {
    /// Wrap a primitive with no name and no tags
    pub fn new(primitive: Primitive) -> Self {
        Self {
            name: None,
            tags: Vec::new(),
            primitive,
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Check whether this object carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// All live shape objects, kept in creation order
#[derive(Clone, Debug, Default)]
pub struct ShapeWorld {
    objects: SlotMap<ObjectKey, ShapeObject>,
    /// Live keys in the order they were added
    order: Vec<ObjectKey>,
}

impl ShapeWorld {
    /// Create a new empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, returning its key
    pub fn add_object(&mut self, object: ShapeObject) -> ObjectKey {
        let key = self.objects.insert(object);
        self.order.push(key);
        key
    }

    /// Add a bare primitive, returning its key
    pub fn add_primitive(&mut self, primitive: Primitive) -> ObjectKey {
        self.add_object(ShapeObject::new(primitive))
    }

    /// Remove an object and return it
    pub fn remove_object(&mut self, key: ObjectKey) -> Option<ShapeObject> {
        let removed = self.objects.remove(key)?;
        self.order.retain(|k| *k != key);
        Some(removed)
    }

    /// Get an object by key
    pub fn get(&self, key: ObjectKey) -> Option<&ShapeObject> {
        self.objects.get(key)
    }

    /// Get a mutable object by key
    pub fn get_mut(&mut self, key: ObjectKey) -> Option<&mut ShapeObject> {
        self.objects.get_mut(key)
    }

    /// Find the first object with the given name
    pub fn get_by_name(&self, name: &str) -> Option<(ObjectKey, &ShapeObject)> {
        self.iter().find(|(_, o)| o.name.as_deref() == Some(name))
    }

    /// Keys of every object carrying `tag`, in creation order
    pub fn keys_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = ObjectKey> + 'a {
        self.iter().filter(move |(_, o)| o.has_tag(tag)).map(|(k, _)| k)
    }

    /// Number of live objects
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the world is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove every object
    pub fn clear(&mut self) {
        self.objects.clear();
        self.order.clear();
    }

    /// Iterate over keys and objects in creation order
    pub fn iter(&self) -> impl Iterator<Item = (ObjectKey, &ShapeObject)> {
        self.order
            .iter()
            .filter_map(move |&k| self.objects.get(k).map(|o| (k, o)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    fn sphere(r: f32) -> Primitive {
        Primitive::new(ShapeKind::Sphere, &[r])
    }

    #[test]
    fn test_world_new() {
        let world = ShapeWorld::new();
        assert!(world.is_empty());
        assert_eq!(world.len(), 0);
    }

    #[test]
    fn test_world_add_and_get() {
        let mut world = ShapeWorld::new();
        let key = world.add_object(ShapeObject::new(sphere(2.0)).with_name("ball"));
        assert_eq!(world.len(), 1);
        assert_eq!(world.get(key).map(|o| o.primitive.dimensions[0]), Some(2.0));
        assert_eq!(world.get_by_name("ball").map(|(k, _)| k), Some(key));
    }

    #[test]
    fn test_world_iteration_follows_creation_order() {
        let mut world = ShapeWorld::new();
        let a = world.add_primitive(sphere(1.0));
        let b = world.add_primitive(sphere(2.0));
        let c = world.add_primitive(sphere(3.0));
        world.remove_object(b);
        // The freed slot is reused, but the new object still goes last
        let d = world.add_primitive(sphere(4.0));
        let keys: Vec<_> = world.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![a, c, d]);
    }

    #[test]
    fn test_removed_key_is_stale() {
        let mut world = ShapeWorld::new();
        let key = world.add_primitive(sphere(1.0));
        assert!(world.remove_object(key).is_some());
        assert!(world.get(key).is_none());
        assert!(world.remove_object(key).is_none());
        let fresh = world.add_primitive(sphere(1.0));
        assert_ne!(key, fresh);
        assert!(world.get(key).is_none());
    }

    #[test]
    fn test_keys_with_tag() {
        let mut world = ShapeWorld::new();
        let floor = world.add_object(ShapeObject::new(sphere(1.0)).with_tag("static"));
        world.add_object(ShapeObject::new(sphere(1.0)).with_tag("hazard"));
        let keys: Vec<_> = world.keys_with_tag("static").collect();
        assert_eq!(keys, vec![floor]);
    }

    #[test]
    fn test_clear() {
        let mut world = ShapeWorld::new();
        world.add_primitive(sphere(1.0));
        world.clear();
        assert!(world.is_empty());
        assert_eq!(world.iter().count(), 0);
    }
}
