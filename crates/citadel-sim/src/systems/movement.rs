//! Kinematic integration system.
//!
//! Advances rockets and interceptors along their fixed headings:
//! position += (cos angle, sin angle) * speed, one step per tick.

use hecs::World;

use citadel_core::components::{Interceptor, Rocket, Trajectory};
use citadel_core::types::Point;

/// Run kinematic integration for all projectiles.
pub fn run(world: &mut World) {
    // Rockets fly their heading without arrival handling of their own;
    // the ground and target-vicinity checks catch them later in the tick.
    for (_entity, (pos, traj, _rocket)) in
        world.query_mut::<(&mut Point, &Trajectory, &Rocket)>()
    {
        pos.x += traj.angle.cos() * traj.speed;
        pos.y += traj.angle.sin() * traj.speed;
    }

    // Interceptor steps clamp at the aim point: a round faster than the
    // arrival radius must not jump across it and fly on forever.
    for (_entity, (pos, traj, _interceptor)) in
        world.query_mut::<(&mut Point, &Trajectory, &Interceptor)>()
    {
        if pos.distance_to(&traj.target) <= traj.speed {
            *pos = traj.target;
        } else {
            pos.x += traj.angle.cos() * traj.speed;
            pos.y += traj.angle.sin() * traj.speed;
        }
    }
}
