//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{BatterySlot, BlastPhase};
use crate::types::Point;

/// Stable entity identifier, assigned from the engine's monotonic counter.
/// Snapshots sort by it so output order is independent of world iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Marks an entity as an incoming enemy rocket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rocket;

/// Marks an entity as a player-launched interceptor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interceptor;

/// Straight-line flight toward a fixed target point.
/// Shared by rockets and interceptors; the heading never changes after spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Trajectory {
    /// Where this projectile is headed.
    pub target: Point,
    /// Displacement per tick.
    pub speed: f64,
    /// Heading angle (radians, screen coordinates), fixed at spawn.
    pub angle: f64,
}

/// Where an interceptor was launched from (the battery muzzle).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LaunchPoint {
    pub start: Point,
}

/// An expanding-then-fading detonation zone. Position is fixed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Blast {
    /// Current radius. Rockets strictly inside it are destroyed.
    pub radius: f64,
    /// Radius at which growth stops and fading begins.
    pub max_radius: f64,
    pub phase: BlastPhase,
    /// Opacity 0..1; the blast is removed once it reaches 0.
    pub alpha: f64,
}

/// A defended city. Destroyed is one-way within a play session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct City {
    pub destroyed: bool,
}

/// A launch battery. Destroyed batteries refuse fire commands and are
/// excluded from rocket targeting, but keep their ammo count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Battery {
    pub slot: BatterySlot,
    /// Remaining interceptors, always within 0..=max_ammo.
    pub ammo: u32,
    pub max_ammo: u32,
    pub destroyed: bool,
}
