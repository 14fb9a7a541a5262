//! CITADEL headless application.
//!
//! This crate wires the simulation engine to a fixed-cadence game loop
//! thread and exposes the channel types the demo binary drives it with.
//! There is no rendering here: the snapshot stream is the whole interface.

pub mod game_loop;
pub mod state;

pub use citadel_core as core;
