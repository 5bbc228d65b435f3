//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`S4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use sdf4d_core::{Observer, Vec3};
use sdf4d_render::{PassUniforms, RenderFlags};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Observer w-pose; overrides the scene's own when set
    #[serde(default)]
    pub observer: Option<ObserverConfig>,
    /// Scene file and tiling
    #[serde(default)]
    pub scene: SceneConfig,
    /// Raymarch limits carried to the renderer
    #[serde(default)]
    pub raymarch: RaymarchConfig,
    /// Lighting carried to the renderer
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Collision probe configuration
    #[serde(default)]
    pub collision: CollisionConfig,
    /// Text preview of a slice
    #[serde(default)]
    pub preview: PreviewConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`S4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // S4D_OBSERVER__W_POS=2.5 -> observer.w_pos = 2.5
        figment = figment.merge(Env::prefixed("S4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Per-pass uniforms with raymarch and lighting settings filled in
    ///
    /// Observer, tiling and count are left for the payload builder.
    pub fn pass_uniforms(&self) -> PassUniforms {
        let mut flags = RenderFlags::empty();
        flags.set(RenderFlags::LIT, self.lighting.lit);
        flags.set(RenderFlags::HARD_SHADOW, self.lighting.hard_shadow);
        flags.set(RenderFlags::AMBIENT_OCCLUSION, self.lighting.ambient_occlusion);

        PassUniforms {
            light_dir: self.lighting.direction,
            light_intensity: self.lighting.intensity,
            light_color: self.lighting.color,
            shadow_intensity: self.lighting.shadow_intensity,
            max_steps: self.raymarch.max_steps as f32,
            max_dist: self.raymarch.max_dist,
            surf_dist: self.raymarch.surf_dist,
            flags: flags.bits(),
            shadow_min: self.lighting.shadow_min,
            shadow_max: self.lighting.shadow_max,
            shadow_smooth: self.lighting.shadow_smooth,
            ao_step: self.lighting.ao_step,
            ao_intensity: self.lighting.ao_intensity,
            ao_iterations: self.lighting.ao_iterations,
            ..PassUniforms::default()
        }
    }
}

/// Observer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Position along w
    pub w_pos: f32,
    /// Rotation coupling x/y/z with w, in degrees
    pub w_rot: [f32; 3],
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            w_pos: 0.0,
            w_rot: [0.0; 3],
        }
    }
}

impl ObserverConfig {
    /// As a core [`Observer`]
    pub fn to_observer(&self) -> Observer {
        Observer::new(self.w_pos, Vec3::from(self.w_rot))
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RON scene file to load
    pub path: PathBuf,
    /// Overrides the scene's own tiling period when set
    pub loop_period: Option<[f32; 3]>,
    /// Number of simulation ticks the binary runs
    pub ticks: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("scenes/demo.ron"),
            loop_period: None,
            ticks: 8,
        }
    }
}

/// Raymarch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RaymarchConfig {
    /// Maximum march steps
    pub max_steps: u32,
    /// Maximum march distance
    pub max_dist: f32,
    /// Surface hit threshold
    pub surf_dist: f32,
}

impl Default for RaymarchConfig {
    fn default() -> Self {
        Self {
            max_steps: 225,
            max_dist: 1000.0,
            surf_dist: 0.01,
        }
    }
}

/// Lighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub lit: bool,
    /// Light travel direction [x, y, z]
    pub direction: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
    pub hard_shadow: bool,
    pub shadow_intensity: f32,
    pub shadow_min: f32,
    pub shadow_max: f32,
    /// Softness factor for soft shadows
    pub shadow_smooth: f32,
    pub ambient_occlusion: bool,
    pub ao_step: f32,
    pub ao_intensity: f32,
    pub ao_iterations: u32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            lit: false,
            direction: [0.0, -1.0, 0.0],
            color: [1.0; 3],
            intensity: 1.0,
            hard_shadow: true,
            shadow_intensity: 1.0,
            shadow_min: 0.1,
            shadow_max: 100.0,
            shadow_smooth: 8.0,
            ambient_occlusion: false,
            ao_step: 0.1,
            ao_intensity: 0.25,
            ao_iterations: 3,
        }
    }
}

/// Collision probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Largest downward step per tick
    pub max_movement: f32,
    /// Contact threshold for probe points
    pub hit_threshold: f32,
    /// Probe start position, used when the scene names none
    pub spawn: [f32; 3],
    /// Probe points as offsets from the probe position
    pub probe_offsets: Vec<[f32; 3]>,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            max_movement: 1.0,
            hit_threshold: 0.0,
            spawn: [0.0, 5.0, 0.0],
            probe_offsets: vec![
                [0.0, -0.5, 0.0],
                [0.5, 0.0, 0.0],
                [-0.5, 0.0, 0.0],
                [0.0, 0.0, 0.5],
                [0.0, 0.0, -0.5],
            ],
        }
    }
}

/// Preview configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Print a text slice after the run
    pub enabled: bool,
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
    /// Half the world-space extent of the slice
    pub half_extent: f32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 64,
            height: 24,
            half_extent: 6.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
