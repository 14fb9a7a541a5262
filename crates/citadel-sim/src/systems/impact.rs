//! Ground impact system — rocket strikes, ground detonations, and damage.
//!
//! A rocket has struck when its y reaches the ground line, or when it is in
//! the immediate vicinity of its intended target (which may sit above the
//! literal ground line, e.g. a battery turret). Each strike removes the
//! rocket, spawns a smaller ground explosion at its position, and destroys
//! every city and battery within the damage radius.

use hecs::{Entity, World};

use citadel_core::components::{Battery, City, EntityId, Rocket, Trajectory};
use citadel_core::constants::{
    EXPLOSION_MAX_RADIUS, GROUND_DAMAGE_RADIUS, GROUND_EXPLOSION_SCALE, GROUND_Y,
    TARGET_VICINITY_MARGIN, TARGET_VICINITY_RANGE,
};
use citadel_core::events::GameEvent;
use citadel_core::types::Point;

use crate::world_setup;

/// Resolve ground strikes and the damage they cause.
pub fn run(world: &mut World, next_id: &mut u32, events: &mut Vec<GameEvent>) {
    let mut strikes: Vec<(Entity, Point)> = Vec::new();

    for (entity, (pos, traj, _rocket)) in
        world.query::<(&Point, &Trajectory, &Rocket)>().iter()
    {
        let at_ground = pos.y >= GROUND_Y;
        let at_target = pos.y >= traj.target.y - TARGET_VICINITY_MARGIN
            && (pos.x - traj.target.x).abs() < TARGET_VICINITY_RANGE;
        if at_ground || at_target {
            strikes.push((entity, *pos));
        }
    }

    if strikes.is_empty() {
        return;
    }

    for (entity, _) in &strikes {
        let _ = world.despawn(*entity);
    }

    // Ground detonations are 80% the size of an interceptor burst. They are
    // spawned after the blast lifecycle ran, so they begin expanding next
    // tick (matching the frame ordering the collision rules assume).
    for (_, position) in &strikes {
        world_setup::spawn_explosion(
            world,
            next_id,
            *position,
            EXPLOSION_MAX_RADIUS * GROUND_EXPLOSION_SCALE,
        );
        events.push(GameEvent::GroundImpact {
            position: *position,
        });
    }

    // Damage: every strike checks every asset independently. Destruction is
    // one-way; events fire only on the false -> true transition.
    for (_, strike) in &strikes {
        for (_entity, (pos, city, id)) in world.query_mut::<(&Point, &mut City, &EntityId)>() {
            if !city.destroyed && strike.distance_to(pos) < GROUND_DAMAGE_RADIUS {
                city.destroyed = true;
                events.push(GameEvent::CityDestroyed { id: id.0 });
            }
        }
        for (_entity, (pos, battery)) in world.query_mut::<(&Point, &mut Battery)>() {
            if !battery.destroyed && strike.distance_to(pos) < GROUND_DAMAGE_RADIUS {
                battery.destroyed = true;
                events.push(GameEvent::BatteryDestroyed {
                    slot: battery.slot,
                });
            }
        }
    }
}
