//! Level progression system.
//!
//! Each level is cleared at level * LEVEL_SCORE_STEP points. Clearing a
//! level bumps the difficulty and refills every battery's ammo. The refill
//! is unconditional: destroyed batteries get their ammo back too, but stay
//! destroyed and keep refusing fire.

use hecs::World;

use citadel_core::components::Battery;
use citadel_core::constants::{LEVEL_SCORE_STEP, WIN_SCORE};
use citadel_core::events::GameEvent;

/// Check the score threshold and advance the level.
pub fn run(world: &mut World, score: u32, level: &mut u32, events: &mut Vec<GameEvent>) {
    let goal = *level * LEVEL_SCORE_STEP;
    if score >= goal && score < WIN_SCORE {
        *level += 1;

        for (_entity, battery) in world.query_mut::<&mut Battery>() {
            battery.ammo = battery.max_ammo;
        }

        events.push(GameEvent::LevelUp { level: *level });
    }
}
