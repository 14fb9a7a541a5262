//! Game state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{BatterySlot, BlastPhase, GameStatus, Language};
use crate::events::GameEvent;
use crate::types::{Point, SimTime};

/// Complete game state handed to the renderer after each tick.
/// This is the engine's entire read model; there is no other surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub status: GameStatus,
    pub language: Language,
    pub score: u32,
    pub level: u32,
    pub rockets: Vec<RocketView>,
    pub interceptors: Vec<InterceptorView>,
    pub explosions: Vec<ExplosionView>,
    pub cities: Vec<CityView>,
    pub batteries: Vec<BatteryView>,
    /// Feedback events from this tick, in emission order.
    pub events: Vec<GameEvent>,
}

/// An incoming rocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketView {
    pub id: u32,
    pub position: Point,
    pub target: Point,
    /// Displacement per tick.
    pub speed: f64,
    /// Heading angle (radians).
    pub angle: f64,
}

/// An interceptor in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptorView {
    pub id: u32,
    pub position: Point,
    /// Launch position (for drawing the trail).
    pub start: Point,
    /// The player-chosen aim point (for drawing the target cross).
    pub target: Point,
    pub angle: f64,
}

/// An explosion in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: u32,
    pub position: Point,
    pub radius: f64,
    pub max_radius: f64,
    pub phase: BlastPhase,
    pub alpha: f64,
}

/// A defended city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityView {
    pub id: u32,
    pub position: Point,
    pub destroyed: bool,
}

/// A launch battery and its ammo state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryView {
    pub slot: BatterySlot,
    pub position: Point,
    pub ammo: u32,
    pub max_ammo: u32,
    pub destroyed: bool,
}
