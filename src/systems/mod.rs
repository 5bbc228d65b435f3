//! Application systems
//!
//! The binary owns one of each and calls them in order every run.

mod preview;
mod simulation;

pub use preview::PreviewSystem;
pub use simulation::{SimulationSystem, StepResult};
