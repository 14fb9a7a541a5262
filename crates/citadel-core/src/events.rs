//! Events emitted by the simulation for audio and UI feedback.
//!
//! Each tick's events ride along in the snapshot and are drained afterward;
//! the driver decides what to do with them (sound cues, log lines).

use serde::{Deserialize, Serialize};

use crate::enums::BatterySlot;
use crate::types::Point;

/// One-shot feedback events for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An interceptor left its battery.
    InterceptorAway { slot: BatterySlot },
    /// A rocket was caught by an explosion.
    RocketDestroyed { position: Point, points: u32 },
    /// A rocket struck the ground (or detonated at its target).
    GroundImpact { position: Point },
    /// A city was destroyed by a ground strike.
    CityDestroyed { id: u32 },
    /// A battery was destroyed by a ground strike.
    BatteryDestroyed { slot: BatterySlot },
    /// Score crossed the level threshold; ammo was refilled.
    LevelUp { level: u32 },
    /// Score reached the win threshold.
    Victory { score: u32 },
    /// Every battery is destroyed.
    Defeat,
}
