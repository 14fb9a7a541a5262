//! Simulation engine for CITADEL.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use citadel_core as core;
pub use engine::SimulationEngine;
