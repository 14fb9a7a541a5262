//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world. View lists are
//! sorted by id (batteries by slot) so output order does not depend on
//! world iteration order.

use hecs::World;

use citadel_core::components::*;
use citadel_core::enums::{GameStatus, Language};
use citadel_core::events::GameEvent;
use citadel_core::state::*;
use citadel_core::types::{Point, SimTime};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    status: GameStatus,
    language: Language,
    score: u32,
    level: u32,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        status,
        language,
        score,
        level,
        rockets: build_rockets(world),
        interceptors: build_interceptors(world),
        explosions: build_explosions(world),
        cities: build_cities(world),
        batteries: build_batteries(world),
        events,
    }
}

fn build_rockets(world: &World) -> Vec<RocketView> {
    let mut rockets: Vec<RocketView> = world
        .query::<(&EntityId, &Point, &Trajectory, &Rocket)>()
        .iter()
        .map(|(_, (id, pos, traj, _))| RocketView {
            id: id.0,
            position: *pos,
            target: traj.target,
            speed: traj.speed,
            angle: traj.angle,
        })
        .collect();

    rockets.sort_by_key(|r| r.id);
    rockets
}

fn build_interceptors(world: &World) -> Vec<InterceptorView> {
    let mut interceptors: Vec<InterceptorView> = world
        .query::<(&EntityId, &Point, &Trajectory, &LaunchPoint, &Interceptor)>()
        .iter()
        .map(|(_, (id, pos, traj, launch, _))| InterceptorView {
            id: id.0,
            position: *pos,
            start: launch.start,
            target: traj.target,
            angle: traj.angle,
        })
        .collect();

    interceptors.sort_by_key(|i| i.id);
    interceptors
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    let mut explosions: Vec<ExplosionView> = world
        .query::<(&EntityId, &Point, &Blast)>()
        .iter()
        .map(|(_, (id, pos, blast))| ExplosionView {
            id: id.0,
            position: *pos,
            radius: blast.radius,
            max_radius: blast.max_radius,
            phase: blast.phase,
            alpha: blast.alpha,
        })
        .collect();

    explosions.sort_by_key(|e| e.id);
    explosions
}

fn build_cities(world: &World) -> Vec<CityView> {
    let mut cities: Vec<CityView> = world
        .query::<(&EntityId, &Point, &City)>()
        .iter()
        .map(|(_, (id, pos, city))| CityView {
            id: id.0,
            position: *pos,
            destroyed: city.destroyed,
        })
        .collect();

    cities.sort_by_key(|c| c.id);
    cities
}

fn build_batteries(world: &World) -> Vec<BatteryView> {
    let mut batteries: Vec<BatteryView> = world
        .query::<(&Point, &Battery)>()
        .iter()
        .map(|(_, (pos, battery))| BatteryView {
            slot: battery.slot,
            position: *pos,
            ammo: battery.ammo,
            max_ammo: battery.max_ammo,
            destroyed: battery.destroyed,
        })
        .collect();

    batteries.sort_by_key(|b| b.slot);
    batteries
}
