//! Entity spawn factories for setting up the simulation world.
//!
//! Creates cities, batteries, rockets, interceptors, and explosions with
//! appropriate component bundles. Entity ids come from the engine's
//! monotonic counter so snapshot order is reproducible.

use hecs::World;

use citadel_core::components::*;
use citadel_core::constants::*;
use citadel_core::enums::{BatterySlot, BlastPhase};
use citadel_core::types::Point;

/// Set up the defended assets for a fresh game: six cities and three
/// batteries on the ground line, full ammo, nothing destroyed.
pub fn setup_defenses(world: &mut World, next_id: &mut u32) {
    for &x in CITY_POSITIONS_X.iter() {
        let id = alloc_id(next_id);
        world.spawn((id, Point::new(x, GROUND_Y), City { destroyed: false }));
    }

    for (i, slot) in BatterySlot::ALL.into_iter().enumerate() {
        world.spawn((
            Point::new(BATTERY_POSITIONS_X[i], GROUND_Y),
            Battery {
                slot,
                ammo: BATTERY_AMMO[i],
                max_ammo: BATTERY_AMMO[i],
                destroyed: false,
            },
        ));
    }
}

/// Spawn a rocket heading from `position` toward `target` at `speed`.
/// The heading angle is fixed here and never changes.
pub fn spawn_rocket(
    world: &mut World,
    next_id: &mut u32,
    position: Point,
    target: Point,
    speed: f64,
) -> hecs::Entity {
    let angle = position.angle_to(&target);
    world.spawn((
        Rocket,
        alloc_id(next_id),
        position,
        Trajectory {
            target,
            speed,
            angle,
        },
    ))
}

/// Spawn an interceptor at a battery muzzle, aimed at the player's target.
pub fn spawn_interceptor(
    world: &mut World,
    next_id: &mut u32,
    muzzle: Point,
    target: Point,
) -> hecs::Entity {
    let angle = muzzle.angle_to(&target);
    world.spawn((
        Interceptor,
        alloc_id(next_id),
        muzzle,
        Trajectory {
            target,
            speed: INTERCEPTOR_SPEED,
            angle,
        },
        LaunchPoint { start: muzzle },
    ))
}

/// Spawn an explosion at a fixed position, radius 0, growing.
pub fn spawn_explosion(
    world: &mut World,
    next_id: &mut u32,
    position: Point,
    max_radius: f64,
) -> hecs::Entity {
    world.spawn((
        alloc_id(next_id),
        position,
        Blast {
            radius: 0.0,
            max_radius,
            phase: BlastPhase::Growing,
            alpha: 1.0,
        },
    ))
}

fn alloc_id(next_id: &mut u32) -> EntityId {
    let id = EntityId(*next_id);
    *next_id += 1;
    id
}
