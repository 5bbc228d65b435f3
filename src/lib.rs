//! sdf4d application layer
//!
//! Configuration loading and the systems the `sdf4d` binary drives.

pub mod config;
pub mod systems;
