//! Simulation system
//!
//! Drives one simulation step in a fixed order:
//! - Snapshot the live world into a registry
//! - Probe the snapshot (ground-following, contacts)
//! - Apply the probe's movement
//!
//! World edits made between steps show up in the next snapshot, never in
//! the middle of one.

use sdf4d_core::{Observer, SceneRegistry, ShapeWorld, Vec3};
use sdf4d_physics::{CollisionProbe, DimensionTransition, EventSink, TickReport};

use crate::config::CollisionConfig;

/// Result of a simulation step
pub struct StepResult {
    /// Index of the step, starting at 0
    pub tick: u64,
    /// Probe outcome for this step
    pub report: TickReport,
    /// Probe position after the step
    pub probe_position: Vec3,
}

/// Owns the live world and the probe, and steps them together
pub struct SimulationSystem {
    world: ShapeWorld,
    observer: Observer,
    loop_period: Vec3,
    probe: CollisionProbe,
    probe_position: Vec3,
    probe_offsets: Vec<Vec3>,
    tick: u64,
}

impl SimulationSystem {
    /// Create a simulation over `world` with the probe placed at `spawn`
    pub fn new(
        world: ShapeWorld,
        observer: Observer,
        loop_period: Vec3,
        spawn: Vec3,
        collision: &CollisionConfig,
    ) -> Self {
        Self {
            world,
            observer,
            loop_period,
            probe: CollisionProbe::new(collision.max_movement)
                .with_hit_threshold(collision.hit_threshold),
            probe_position: spawn,
            probe_offsets: collision.probe_offsets.iter().copied().map(Vec3::from).collect(),
            tick: 0,
        }
    }

    /// The live world
    pub fn world(&self) -> &ShapeWorld {
        &self.world
    }

    /// The live world, for edits that take effect on the next step
    pub fn world_mut(&mut self) -> &mut ShapeWorld {
        &mut self.world
    }

    /// Current observer
    pub fn observer(&self) -> Observer {
        self.observer
    }

    /// Move the observer; the next snapshot sees the new pose
    pub fn set_observer(&mut self, observer: Observer) {
        self.observer = observer;
    }

    /// Current probe position
    pub fn probe_position(&self) -> Vec3 {
        self.probe_position
    }

    /// The probe
    pub fn probe(&self) -> &CollisionProbe {
        &self.probe
    }

    /// Forward a dimension transition to the probe
    pub fn on_dimension_transition(&mut self, transition: DimensionTransition) {
        self.probe.on_dimension_transition(transition);
    }

    /// Snapshot the world as it is now
    pub fn snapshot(&self) -> SceneRegistry {
        SceneRegistry::snapshot(&self.world, self.observer, self.loop_period)
    }

    /// Run one step, sending contacts to `sink`
    pub fn step(&mut self, sink: &mut impl EventSink) -> StepResult {
        // 1. Snapshot
        let registry = self.snapshot();

        // 2. Evaluate against the snapshot only
        let mut position = self.probe_position;
        let points: Vec<Vec3> = self
            .probe_offsets
            .iter()
            .map(|&offset| self.probe_position + offset)
            .collect();
        let report = self.probe.tick(&registry, &mut position, &points, sink);

        // 3. Mutate
        self.probe_position = position;
        let tick = self.tick;
        self.tick += 1;

        log::debug!(
            "Tick {}: ground {:.3}, step {:.3}, {} contacts",
            tick,
            report.ground.distance,
            report.step,
            report.contacts
        );

        StepResult {
            tick,
            report,
            probe_position: self.probe_position,
        }
    }
}
