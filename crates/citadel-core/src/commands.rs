//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Invalid
//! commands (wrong status, no eligible battery, out-of-band target,
//! non-finite coordinates) are silently dropped — there is no error channel.

use serde::{Deserialize, Serialize};

use crate::enums::Language;
use crate::types::Point;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new game from Start, Won, or Lost. Fully resets the play
    /// field (score, level, entities, ammo); leaves the language selector
    /// untouched. No-op while Playing.
    StartGame,

    /// Launch an interceptor at a world-space point. The nearest
    /// non-destroyed battery with ammo fires; measured by horizontal
    /// distance only.
    Fire { target: Point },

    /// Switch the display language. Always valid.
    SetLanguage { language: Language },
}
