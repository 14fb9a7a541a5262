//! Explosion lifecycle system.
//!
//! Growing explosions expand linearly until max radius, then flip to fading;
//! fading explosions lose alpha linearly and are removed at alpha <= 0.
//! The radius stays at max while fading, so a fading explosion still
//! destroys rockets until it disappears.

use hecs::{Entity, World};

use citadel_core::components::Blast;
use citadel_core::constants::{EXPLOSION_FADE_SPEED, EXPLOSION_GROW_SPEED};
use citadel_core::enums::BlastPhase;

/// Advance every explosion one step and remove the burnt-out ones.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, blast) in world.query_mut::<&mut Blast>() {
        match blast.phase {
            BlastPhase::Growing => {
                blast.radius += EXPLOSION_GROW_SPEED;
                if blast.radius >= blast.max_radius {
                    blast.radius = blast.max_radius;
                    blast.phase = BlastPhase::Fading;
                }
            }
            BlastPhase::Fading => {
                blast.alpha -= EXPLOSION_FADE_SPEED;
                if blast.alpha <= 0.0 {
                    despawn_buffer.push(entity);
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
