//! sdf4d - 4D signed distance field scenes
//!
//! Loads a scene, steps the collision probe through it for a fixed number of
//! ticks, and prints a text slice of the result.

use std::sync::mpsc;

use sdf4d::config::AppConfig;
use sdf4d::systems::{PreviewSystem, SimulationSystem};
use sdf4d_core::{Scene, Vec3};
use sdf4d_physics::ProbeEvent;

fn main() {
    // Load configuration before logging so the level can come from it
    let config = AppConfig::load();
    let level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting sdf4d");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let scene = Scene::load(&config.scene.path).unwrap_or_else(|e| {
        log::warn!(
            "Failed to load scene '{}': {}. Using an empty scene.",
            config.scene.path.display(),
            e
        );
        Scene::new("empty")
    });

    let loop_period = config
        .scene
        .loop_period
        .map(Vec3::from)
        .unwrap_or(scene.loop_period);
    let observer = config
        .observer
        .as_ref()
        .map(|o| o.to_observer())
        .unwrap_or(scene.observer);
    let spawn = Vec3::from(scene.probe_spawn.unwrap_or(config.collision.spawn));

    let world = scene.instantiate();
    log::info!("Loaded scene '{}' with {} objects", scene.name, world.len());

    let mut simulation = SimulationSystem::new(world, observer, loop_period, spawn, &config.collision);
    let (mut tx, rx) = mpsc::channel::<ProbeEvent>();

    for _ in 0..config.scene.ticks {
        let result = simulation.step(&mut tx);
        for event in rx.try_iter() {
            let ProbeEvent::CollisionDetected { object } = event;
            let name = simulation
                .world()
                .get(object)
                .and_then(|o| o.name.as_deref())
                .unwrap_or("<unnamed>");
            log::info!("Tick {}: probe touching '{}'", result.tick, name);
        }
    }

    let position = simulation.probe_position();
    log::info!("Probe settled at ({:.2}, {:.2}, {:.2})", position.x, position.y, position.z);

    if config.preview.enabled {
        let preview = PreviewSystem::new(&config.preview);
        let registry = simulation.snapshot();
        let text = preview.render(
            &registry,
            &config.pass_uniforms(),
            Vec3::new(0.0, 0.0, position.z),
            Some(position),
        );
        println!("{}", text);
    }
}
