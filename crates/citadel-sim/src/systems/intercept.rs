//! Rocket-vs-explosion collision system.
//!
//! A rocket strictly inside any active explosion's current radius is
//! destroyed and scores a fixed bonus. One kill per rocket per tick —
//! overlapping explosions never double-score.

use hecs::{Entity, World};

use citadel_core::components::{Blast, Rocket};
use citadel_core::constants::SCORE_PER_ROCKET;
use citadel_core::events::GameEvent;
use citadel_core::types::Point;

/// Destroy rockets caught inside explosions and award score.
pub fn run(world: &mut World, score: &mut u32, events: &mut Vec<GameEvent>) {
    let blasts: Vec<(Point, f64)> = world
        .query::<(&Point, &Blast)>()
        .iter()
        .map(|(_, (pos, blast))| (*pos, blast.radius))
        .collect();

    if blasts.is_empty() {
        return;
    }

    let mut killed: Vec<(Entity, Point)> = Vec::new();
    for (entity, (pos, _rocket)) in world.query::<(&Point, &Rocket)>().iter() {
        if blasts
            .iter()
            .any(|(center, radius)| pos.distance_to(center) < *radius)
        {
            killed.push((entity, *pos));
        }
    }

    for (entity, position) in killed {
        let _ = world.despawn(entity);
        *score += SCORE_PER_ROCKET;
        events.push(GameEvent::RocketDestroyed {
            position,
            points: SCORE_PER_ROCKET,
        });
    }
}
