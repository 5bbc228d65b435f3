//! Serial-side collision probing for sdf4d
//!
//! This crate runs once per simulation step against a scene snapshot:
//! - Ground-following with a per-tick step cap
//! - Contact detection at extra probe points, attributed to scene objects
//! - Suspension while a dimension transition is in progress

pub mod events;
pub mod probe;

// Re-export commonly used types
pub use events::{DimensionTransition, EventSink, ProbeEvent};
pub use probe::{CollisionProbe, ProbeState, TickReport, DEFAULT_HIT_THRESHOLD, DEFAULT_MAX_MOVEMENT};
