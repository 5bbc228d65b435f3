//! Ground-following collision probe
//!
//! Runs once per simulation step against the registry snapshot for that
//! step. The probe samples the scene at its own position to fall onto the
//! nearest surface, then samples each extra probe point and reports
//! penetrations through an [`EventSink`].

use crate::events::{DimensionTransition, EventSink, ProbeEvent};
use sdf4d_core::{evaluate_scene, DistanceSample, ObjectKey, SceneRegistry, Vec3};

/// Default cap on how far the probe moves in one tick
pub const DEFAULT_MAX_MOVEMENT: f32 = 1.0;

/// Default contact threshold; a probe point is in contact strictly below it
pub const DEFAULT_HIT_THRESHOLD: f32 = 0.0;

/// Whether the probe reacts to what it samples
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProbeState {
    /// Ground-following and collision events are active
    #[default]
    Free,
    /// A dimension transition is in progress; sampling continues, nothing reacts
    Suspended,
}

/// Outcome of one [`CollisionProbe::tick`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    /// Scene sample at the probe's own position, before moving
    pub ground: DistanceSample<ObjectKey>,
    /// Downward step, `min(ground.distance, max_movement)`
    pub step: f32,
    /// Whether the step was applied
    pub moved: bool,
    /// Number of collision events emitted
    pub contacts: usize,
}

/// Probe that follows the ground and reports contacts
#[derive(Clone, Debug)]
pub struct CollisionProbe {
    state: ProbeState,
    /// Largest downward step per tick
    pub max_movement: f32,
    /// Distance below which a probe point counts as touching
    pub hit_threshold: f32,
}

impl Default for CollisionProbe {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MOVEMENT)
    }
}

impl CollisionProbe {
    /// Create a free probe with the given step cap
    pub fn new(max_movement: f32) -> Self {
        Self {
            state: ProbeState::Free,
            max_movement,
            hit_threshold: DEFAULT_HIT_THRESHOLD,
        }
    }

    /// Set the contact threshold
    pub fn with_hit_threshold(mut self, hit_threshold: f32) -> Self {
        self.hit_threshold = hit_threshold;
        self
    }

    /// Current state
    #[inline]
    pub fn state(&self) -> ProbeState {
        self.state
    }

    /// Check if the probe is currently suspended
    #[inline]
    pub fn is_suspended(&self) -> bool {
        self.state == ProbeState::Suspended
    }

    /// React to a dimension transition starting or ending
    pub fn on_dimension_transition(&mut self, transition: DimensionTransition) {
        self.state = if transition.is_changing {
            ProbeState::Suspended
        } else {
            ProbeState::Free
        };
        log::info!(
            "Dimension transition to level {} {}, probe {:?}",
            transition.target_level,
            if transition.is_changing { "started" } else { "finished" },
            self.state
        );
    }

    /// Run one probe pass
    ///
    /// The ground sample is taken before any movement. A negative ground
    /// distance gives a negative step, which lifts the probe back out of
    /// the surface. Probe points are sampled where they are given; they do
    /// not follow this tick's step.
    pub fn tick(
        &mut self,
        registry: &SceneRegistry,
        self_position: &mut Vec3,
        probe_points: &[Vec3],
        sink: &mut impl EventSink,
    ) -> TickReport {
        let ground = evaluate_scene(registry, *self_position);
        let step = ground.distance.min(self.max_movement);
        let moved = !self.is_suspended();
        if moved {
            *self_position += Vec3::DOWN * step;
        }

        let mut contacts = 0;
        for &point in probe_points {
            let sample = evaluate_scene(registry, point);
            if sample.distance >= self.hit_threshold || self.is_suspended() {
                continue;
            }
            if let Some(object) = sample.controlling {
                log::trace!("Probe contact at {:?}: {:?} ({})", point, object, sample.distance);
                sink.emit(ProbeEvent::CollisionDetected { object });
                contacts += 1;
            }
        }

        TickReport { ground, step, moved, contacts }
    }
}
