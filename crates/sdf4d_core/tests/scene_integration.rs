//! Integration tests for the scene-to-distance pipeline
//!
//! These tests verify the path from authored data to a scene distance:
//! 1. RON scene files load and instantiate in order
//! 2. Registry snapshots track world edits between passes
//! 3. Observer w-pose selects the 4D cross-section
//! 4. Tiling repeats the scene along wrapped axes

use sdf4d_core::{
    evaluate_scene, ObjectTemplate, Observer, Operation, Primitive, Scene, SceneRegistry,
    ShapeKind, ShapeObject, ShapeWorld, Vec3,
};

const EPSILON: f32 = 1e-4;

fn temp_scene_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("sdf4d_{}_{}.ron", name, std::process::id()))
}

// ==================== Scene File Tests ====================

#[test]
fn test_scene_save_load_evaluate() {
    let mut scene = Scene::new("Saved").with_probe_spawn(0.0, 4.0, 0.0);
    scene.add_object(
        ObjectTemplate::new(Primitive::new(ShapeKind::Plane, &[0.0, 1.0, 0.0, 0.0]))
            .with_name("floor")
            .with_tag("static"),
    );
    scene.add_object(
        ObjectTemplate::new(Primitive::new(ShapeKind::Sphere, &[1.0]).at(Vec3::new(0.0, 1.0, 0.0)))
            .with_name("ball"),
    );

    let path = temp_scene_path("save_load");
    scene.save(&path).expect("scene should save");
    let loaded = Scene::load(&path).expect("scene should load");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, scene);

    let world = loaded.instantiate();
    let registry = SceneRegistry::snapshot(&world, loaded.observer, loaded.loop_period);
    let (ball, _) = world.get_by_name("ball").expect("ball should exist");

    // Above the ball: the ball is nearer than the floor
    let sample = evaluate_scene(&registry, Vec3::new(0.0, 3.0, 0.0));
    assert!((sample.distance - 1.0).abs() < EPSILON);
    assert_eq!(sample.controlling, Some(ball));
}

#[test]
fn test_scene_load_rejects_bad_ron() {
    let path = temp_scene_path("bad_ron");
    std::fs::write(&path, "Scene(name: ").expect("temp file should write");
    let result = Scene::load(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(sdf4d_core::SceneLoadError::Parse(_))));
}

// ==================== Snapshot Tests ====================

#[test]
fn test_removed_object_disappears_next_pass() {
    let mut world = ShapeWorld::new();
    let near = world.add_primitive(Primitive::new(ShapeKind::Sphere, &[1.0]));
    let far = world.add_primitive(Primitive::new(ShapeKind::Sphere, &[1.0]).at(Vec3::new(10.0, 0.0, 0.0)));

    let first = SceneRegistry::snapshot(&world, Observer::default(), Vec3::ZERO);
    assert_eq!(evaluate_scene(&first, Vec3::new(2.0, 0.0, 0.0)).controlling, Some(near));

    world.remove_object(near);
    // The earlier snapshot is unaffected
    assert_eq!(evaluate_scene(&first, Vec3::new(2.0, 0.0, 0.0)).controlling, Some(near));

    let second = SceneRegistry::snapshot(&world, Observer::default(), Vec3::ZERO);
    let sample = evaluate_scene(&second, Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(sample.controlling, Some(far));
    assert!((sample.distance - 7.0).abs() < EPSILON);
}

#[test]
fn test_carved_room() {
    // Subtract removes everything accumulated so far from the new primitive,
    // so the hollow goes in first and the block that carves it second
    let mut world = ShapeWorld::new();
    world.add_object(ShapeObject::new(Primitive::new(ShapeKind::Sphere, &[3.0])).with_name("room"));
    world.add_object(
        ShapeObject::new(
            Primitive::new(ShapeKind::Box, &[4.0]).with_operation(Operation::Subtract),
        )
        .with_name("block"),
    );
    let registry = SceneRegistry::snapshot(&world, Observer::default(), Vec3::ZERO);

    // Centre of the room is empty, the block wall is solid
    assert!(!evaluate_scene(&registry, Vec3::ZERO).is_inside());
    assert!(evaluate_scene(&registry, Vec3::new(3.5, 0.0, 0.0)).is_inside());
    assert!(!evaluate_scene(&registry, Vec3::new(5.0, 0.0, 0.0)).is_inside());
}

// ==================== 4D Tests ====================

#[test]
fn test_observer_sweeps_through_tesseract() {
    let mut world = ShapeWorld::new();
    world.add_primitive(Primitive::new(ShapeKind::Tesseract, &[1.0, 1.0, 1.0, 0.5]));
    let probe = Vec3::ZERO;

    let inside = SceneRegistry::snapshot(&world, Observer::new(0.25, Vec3::ZERO), Vec3::ZERO);
    assert!(evaluate_scene(&inside, probe).is_inside());

    let outside = SceneRegistry::snapshot(&world, Observer::new(1.0, Vec3::ZERO), Vec3::ZERO);
    let sample = evaluate_scene(&outside, probe);
    assert!(!sample.is_inside());
    assert!((sample.distance - 0.5).abs() < EPSILON);
}

#[test]
fn test_observer_w_rotation_is_relative() {
    let mut world = ShapeWorld::new();
    world.add_primitive(
        Primitive::new(ShapeKind::DuoCylinder, &[1.0, 2.0]).with_w(0.0, Vec3::new(0.0, 30.0, 0.0)),
    );
    // Matching the primitive's w rotation cancels it out
    let aligned = SceneRegistry::snapshot(&world, Observer::new(0.0, Vec3::new(0.0, 30.0, 0.0)), Vec3::ZERO);
    let d = evaluate_scene(&aligned, Vec3::new(1.0, 0.0, 0.0)).distance;
    assert!(d.abs() < EPSILON);
}

// ==================== Tiling Tests ====================

#[test]
fn test_tiled_spheres() {
    let mut world = ShapeWorld::new();
    world.add_primitive(Primitive::new(ShapeKind::Sphere, &[1.0]));
    let registry = SceneRegistry::snapshot(&world, Observer::default(), Vec3::new(5.0, 0.0, 5.0));

    let base = evaluate_scene(&registry, Vec3::new(0.5, 0.0, 0.5)).distance;
    for (x, z) in [(5.5, 0.5), (-4.5, 10.5), (20.5, -9.5)] {
        let d = evaluate_scene(&registry, Vec3::new(x, 0.0, z)).distance;
        assert!((d - base).abs() < EPSILON, "({}, {}) gave {} not {}", x, z, d, base);
    }
    // y is not tiled
    assert!(evaluate_scene(&registry, Vec3::new(0.0, 5.0, 0.0)).distance > 3.0);
}
