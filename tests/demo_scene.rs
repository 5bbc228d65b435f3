//! The shipped demo scene loads and the probe lands on its floor

use sdf4d::config::{AppConfig, CollisionConfig};
use sdf4d::systems::{PreviewSystem, SimulationSystem};
use sdf4d_core::{Scene, Vec3};
use sdf4d_physics::ProbeEvent;

#[test]
fn test_demo_scene_settles_on_floor() {
    let scene = Scene::load("scenes/demo.ron").unwrap();
    assert_eq!(scene.objects.len(), 3);
    let spawn = Vec3::from(scene.probe_spawn.unwrap());

    let world = scene.instantiate();
    let floor = world.get_by_name("floor").map(|(key, _)| key).unwrap();
    let collision = CollisionConfig {
        probe_offsets: vec![[0.0, -0.5, 0.0]],
        ..CollisionConfig::default()
    };
    let mut sim = SimulationSystem::new(world, scene.observer, scene.loop_period, spawn, &collision);

    let mut events: Vec<ProbeEvent> = Vec::new();
    for _ in 0..10 {
        sim.step(&mut events);
    }
    // Floor plane sits at y = -2
    assert!((sim.probe_position().y + 2.0).abs() < 1e-5);
    assert!(events.contains(&ProbeEvent::CollisionDetected { object: floor }));
}

#[test]
fn test_demo_preview_has_floor() {
    let scene = Scene::load("scenes/demo.ron").unwrap();
    let config = AppConfig::default();
    let world = scene.instantiate();
    let sim = SimulationSystem::new(world, scene.observer, scene.loop_period, Vec3::ZERO, &config.collision);

    let text = PreviewSystem::new(&config.preview).render(
        &sim.snapshot(),
        &config.pass_uniforms(),
        Vec3::ZERO,
        None,
    );
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), config.preview.height);
    assert!(rows.last().unwrap().chars().all(|c| c == '#'));
}
