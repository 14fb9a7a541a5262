//! Interceptor arrival system — detonates interceptors at their aim point.
//!
//! An interceptor within the arrival radius of its target is removed and
//! replaced by exactly one explosion at that target, radius 0, growing.
//! Runs before the blast lifecycle so the new explosion starts expanding
//! (and can catch rockets) on this same tick.

use hecs::{Entity, World};

use citadel_core::components::{Interceptor, Trajectory};
use citadel_core::constants::{ARRIVAL_EPSILON, EXPLOSION_MAX_RADIUS};
use citadel_core::types::Point;

use crate::world_setup;

/// Detonate every interceptor that has reached its target.
pub fn run(world: &mut World, next_id: &mut u32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let mut detonations: Vec<Point> = Vec::new();

    for (entity, (pos, traj, _interceptor)) in
        world.query_mut::<(&Point, &Trajectory, &Interceptor)>()
    {
        if pos.distance_to(&traj.target) < ARRIVAL_EPSILON {
            despawn_buffer.push(entity);
            detonations.push(traj.target);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for target in detonations {
        world_setup::spawn_explosion(world, next_id, target, EXPLOSION_MAX_RADIUS);
    }
}
