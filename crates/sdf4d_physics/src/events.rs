//! Probe notifications in and out
//!
//! The probe never talks to an event bus directly. Outbound events go to
//! whatever [`EventSink`] the caller passes in; inbound transitions arrive
//! as plain [`DimensionTransition`] values.

use sdf4d_core::ObjectKey;
use std::sync::mpsc::Sender;

/// Something the probe noticed during a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeEvent {
    /// A probe point penetrated the scene; `object` controls the distance there
    CollisionDetected { object: ObjectKey },
}

/// A dimension change starting or finishing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimensionTransition {
    /// True while the transition is in progress
    pub is_changing: bool,
    /// Level the transition leads to
    pub target_level: i32,
}

impl DimensionTransition {
    /// A transition towards `target_level` has begun
    pub fn begin(target_level: i32) -> Self {
        Self { is_changing: true, target_level }
    }

    /// The transition to `target_level` has finished
    pub fn end(target_level: i32) -> Self {
        Self { is_changing: false, target_level }
    }
}

/// Destination for probe events
pub trait EventSink {
    fn emit(&mut self, event: ProbeEvent);
}

impl EventSink for Vec<ProbeEvent> {
    fn emit(&mut self, event: ProbeEvent) {
        self.push(event);
    }
}

impl EventSink for Sender<ProbeEvent> {
    fn emit(&mut self, event: ProbeEvent) {
        if self.send(event).is_err() {
            log::warn!("Dropped {:?}: receiver is gone", event);
        }
    }
}
