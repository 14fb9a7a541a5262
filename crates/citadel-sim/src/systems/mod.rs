//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or is
//! threaded through from the engine.

pub mod arrival;
pub mod blast;
pub mod fire_control;
pub mod impact;
pub mod intercept;
pub mod movement;
pub mod progression;
pub mod snapshot;
pub mod spawner;
