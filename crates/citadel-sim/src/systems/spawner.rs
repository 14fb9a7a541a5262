//! Rocket spawning system — at most one new rocket per tick.
//!
//! Spawn probability and rocket speed both scale with the current level.
//! Targets are chosen uniformly among the currently live cities and
//! batteries; with nothing left to aim at, spawning skips the tick.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use citadel_core::components::{Battery, City, EntityId};
use citadel_core::constants::{
    GAME_WIDTH, ROCKET_LEVEL_SPEED_GAIN, ROCKET_SPEED_MAX, ROCKET_SPEED_MIN, SPAWN_BASE_RATE,
    SPAWN_LEVEL_RATE,
};
use citadel_core::enums::BatterySlot;
use citadel_core::types::Point;

use crate::world_setup;

/// Roll the spawn chance and launch a rocket from the top edge.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, level: u32, next_id: &mut u32) {
    let spawn_chance = SPAWN_BASE_RATE + SPAWN_LEVEL_RATE * level as f64;
    if rng.gen::<f64>() >= spawn_chance {
        return;
    }

    let start = Point::new(rng.gen::<f64>() * GAME_WIDTH, 0.0);

    let targets = live_targets(world);
    if targets.is_empty() {
        return;
    }

    let target = targets[rng.gen_range(0..targets.len())];
    let speed = ROCKET_SPEED_MIN
        + rng.gen::<f64>() * (ROCKET_SPEED_MAX - ROCKET_SPEED_MIN)
        + level as f64 * ROCKET_LEVEL_SPEED_GAIN;

    world_setup::spawn_rocket(world, next_id, start, target, speed);
}

/// Positions of all live cities and batteries, in a stable order
/// (cities by id, then batteries by slot) so target selection is
/// deterministic under a seeded RNG.
fn live_targets(world: &World) -> Vec<Point> {
    let mut cities: Vec<(EntityId, Point)> = world
        .query::<(&EntityId, &Point, &City)>()
        .iter()
        .filter(|(_, (_, _, city))| !city.destroyed)
        .map(|(_, (id, pos, _))| (*id, *pos))
        .collect();
    cities.sort_by_key(|(id, _)| *id);

    let mut batteries: Vec<(BatterySlot, Point)> = world
        .query::<(&Point, &Battery)>()
        .iter()
        .filter(|(_, (_, battery))| !battery.destroyed)
        .map(|(_, (pos, battery))| (battery.slot, *pos))
        .collect();
    batteries.sort_by_key(|(slot, _)| *slot);

    cities
        .into_iter()
        .map(|(_, pos)| pos)
        .chain(batteries.into_iter().map(|(_, pos)| pos))
        .collect()
}
