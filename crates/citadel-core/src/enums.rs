//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game status (top-level state machine).
///
/// Start → Playing (on StartGame) → Won | Lost (on tick) → Playing
/// (on StartGame, which fully resets the play field). Ticks advance the
/// world only while Playing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Start,
    Playing,
    Won,
    Lost,
}

/// Battery position slot. Also the tie-break order for fire commands:
/// when two batteries are equally near, the earlier slot wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BatterySlot {
    Left,
    Middle,
    Right,
}

impl BatterySlot {
    /// All slots in collection order (left to right).
    pub const ALL: [BatterySlot; 3] = [BatterySlot::Left, BatterySlot::Middle, BatterySlot::Right];
}

/// Explosion lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlastPhase {
    /// Radius increasing toward max.
    #[default]
    Growing,
    /// Radius at max, alpha decaying toward zero.
    Fading,
}

/// Display language. Presentation concern only: carried in state for the
/// frontend, never touched by the simulation itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Zh,
}
