//! Fire control — turns a player's aim point into an interceptor launch.
//!
//! The nearest non-destroyed battery with ammo fires, measured by horizontal
//! distance only; ties go to the leftmost slot. Invalid targets (non-finite
//! coordinates, points inside the no-fire band above the ground) and dry
//! batteries drop the command silently.

use hecs::World;

use citadel_core::components::Battery;
use citadel_core::constants::{GAME_HEIGHT, NO_FIRE_BAND};
use citadel_core::enums::BatterySlot;
use citadel_core::events::GameEvent;
use citadel_core::types::Point;

use crate::world_setup;

/// Attempt to fire an interceptor at `target`. No-op when nothing can fire.
pub fn try_fire(world: &mut World, target: Point, next_id: &mut u32, events: &mut Vec<GameEvent>) {
    if !target.is_finite() {
        return;
    }
    // Too close to the ground line for a meaningful intercept.
    if target.y > GAME_HEIGHT - NO_FIRE_BAND {
        return;
    }

    let Some((entity, slot, muzzle)) = nearest_armed_battery(world, &target) else {
        return;
    };

    if let Ok(mut battery) = world.get::<&mut Battery>(entity) {
        battery.ammo -= 1;
    }

    world_setup::spawn_interceptor(world, next_id, muzzle, target);
    events.push(GameEvent::InterceptorAway { slot });
}

/// The eligible battery nearest to the target on the horizontal axis.
/// Candidates are visited in slot order and only a strictly smaller
/// distance replaces the current best, so ties keep the first encountered.
fn nearest_armed_battery(
    world: &World,
    target: &Point,
) -> Option<(hecs::Entity, BatterySlot, Point)> {
    let mut candidates: Vec<(hecs::Entity, BatterySlot, Point, f64)> = world
        .query::<(&Point, &Battery)>()
        .iter()
        .filter(|(_, (_, battery))| !battery.destroyed && battery.ammo > 0)
        .map(|(entity, (pos, battery))| {
            (entity, battery.slot, *pos, pos.horizontal_distance_to(target))
        })
        .collect();
    candidates.sort_by_key(|(_, slot, _, _)| *slot);

    let mut best: Option<(hecs::Entity, BatterySlot, Point, f64)> = None;
    for candidate in candidates {
        let better = match &best {
            Some((_, _, _, best_dist)) => candidate.3 < *best_dist,
            None => true,
        };
        if better {
            best = Some(candidate);
        }
    }

    best.map(|(entity, slot, muzzle, _)| (entity, slot, muzzle))
}
