//! Scene serialization
//!
//! Provides Scene struct for loading/saving scenes from RON files.
//! Scenes contain object templates, the tiling period, the observer's
//! starting w-pose and an optional probe spawn point.

use serde::{Serialize, Deserialize};
use sdf4d_math::Vec3;
use std::path::Path;
use std::fs;
use std::io;

use crate::primitive::{Observer, Primitive};
use crate::world::{ShapeObject, ShapeWorld};

/// Serializable form of a [`ShapeObject`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectTemplate {
    /// Optional name for this object (for lookup)
    #[serde(default)]
    pub name: Option<String>,
    /// Tags for categorization (e.g., "static", "hazard")
    #[serde(default)]
    pub tags: Vec<String>,
    /// The primitive to instantiate
    pub primitive: Primitive,
}

impl ObjectTemplate {
    /// Create a new object template
    pub fn new(primitive: Primitive) -> Self {
        Self {
            name: None,
            tags: Vec::new(),
            primitive,
        }
    }

    /// Set the name of this template
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a tag to this template
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Convert this template to a live object
    pub fn to_object(&self) -> ShapeObject {
        ShapeObject {
            name: self.name.clone(),
            tags: self.tags.clone(),
            primitive: self.primitive.clone(),
        }
    }
}

impl From<&ShapeObject> for ObjectTemplate {
    fn from(object: &ShapeObject) -> Self {
        Self {
            name: object.name.clone(),
            tags: object.tags.clone(),
            primitive: object.primitive.clone(),
        }
    }
}

/// A serializable scene containing object templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Tiling period per axis (zero = no tiling on that axis)
    #[serde(default)]
    pub loop_period: Vec3,
    /// Observer w-pose the scene starts with
    #[serde(default)]
    pub observer: Observer,
    /// Collision probe spawn position [x, y, z]
    #[serde(default)]
    pub probe_spawn: Option<[f32; 3]>,
    /// Object templates in this scene, in evaluation order
    pub objects: Vec<ObjectTemplate>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loop_period: Vec3::ZERO,
            observer: Observer::default(),
            probe_spawn: None,
            objects: Vec::new(),
        }
    }

    /// Capture the objects of a live world into a scene
    pub fn from_world(name: impl Into<String>, world: &ShapeWorld) -> Self {
        let mut scene = Self::new(name);
        scene.objects = world.iter().map(|(_, o)| ObjectTemplate::from(o)).collect();
        scene
    }

    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        let scene = ron::from_str(&contents)?;
        Ok(scene)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add an object template to this scene
    pub fn add_object(&mut self, object: ObjectTemplate) {
        self.objects.push(object);
    }

    /// Set the tiling period
    pub fn with_loop_period(mut self, loop_period: Vec3) -> Self {
        self.loop_period = loop_period;
        self
    }

    /// Set the starting observer pose
    pub fn with_observer(mut self, observer: Observer) -> Self {
        self.observer = observer;
        self
    }

    /// Set the probe spawn position
    pub fn with_probe_spawn(mut self, x: f32, y: f32, z: f32) -> Self {
        self.probe_spawn = Some([x, y, z]);
        self
    }

    /// Build a live world from the templates, preserving their order
    pub fn instantiate(&self) -> ShapeWorld {
        let mut world = ShapeWorld::new();
        for template in &self.objects {
            world.add_object(template.to_object());
        }
        log::debug!("Instantiated scene '{}' with {} objects", self.name, world.len());
        world
    }
}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Error saving a scene
#[derive(Debug)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<ron::Error> for SceneSaveError {
    fn from(e: ron::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {}
