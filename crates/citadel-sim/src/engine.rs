//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed per-tick order, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use citadel_core::commands::PlayerCommand;
use citadel_core::components::Battery;
use citadel_core::constants::WIN_SCORE;
use citadel_core::enums::{GameStatus, Language};
use citadel_core::events::GameEvent;
use citadel_core::state::GameStateSnapshot;
use citadel_core::types::SimTime;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    status: GameStatus,
    language: Language,
    score: u32,
    level: u32,
    rng: ChaCha8Rng,
    next_entity_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    /// The world starts at status Start with all defended assets alive and
    /// full ammo, so the start screen has something to show; `StartGame`
    /// rebuilds the same state and begins play.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let mut next_entity_id = 0;
        world_setup::setup_defenses(&mut world, &mut next_entity_id);

        Self {
            world,
            time: SimTime::default(),
            status: GameStatus::default(),
            language: Language::default(),
            score: 0,
            level: 1,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_entity_id,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// The world only moves while Playing; commands are processed regardless.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.status == GameStatus::Playing {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.status,
            self.language,
            self.score,
            self.level,
            events,
        )
    }

    /// Get the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the current difficulty level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Get the current display language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a rocket at an arbitrary position (for testing).
    #[cfg(test)]
    pub fn spawn_test_rocket(
        &mut self,
        position: citadel_core::types::Point,
        target: citadel_core::types::Point,
        speed: f64,
    ) -> hecs::Entity {
        world_setup::spawn_rocket(&mut self.world, &mut self.next_entity_id, position, target, speed)
    }

    /// Spawn an interceptor at an arbitrary position (for testing).
    #[cfg(test)]
    pub fn spawn_test_interceptor(
        &mut self,
        position: citadel_core::types::Point,
        target: citadel_core::types::Point,
    ) -> hecs::Entity {
        world_setup::spawn_interceptor(&mut self.world, &mut self.next_entity_id, position, target)
    }

    /// Force the score (for driving progression/terminal checks in tests).
    #[cfg(test)]
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Set one battery's ammo directly (for testing).
    #[cfg(test)]
    pub fn set_battery_ammo(&mut self, slot: citadel_core::enums::BatterySlot, ammo: u32) {
        for (_entity, battery) in self.world.query_mut::<&mut Battery>() {
            if battery.slot == slot {
                battery.ammo = ammo;
            }
        }
    }

    /// Mark one battery destroyed (for testing).
    #[cfg(test)]
    pub fn destroy_battery(&mut self, slot: citadel_core::enums::BatterySlot) {
        for (_entity, battery) in self.world.query_mut::<&mut Battery>() {
            if battery.slot == slot {
                battery.destroyed = true;
            }
        }
    }

    /// Mark every battery destroyed (for testing loss conditions).
    #[cfg(test)]
    pub fn destroy_all_batteries(&mut self) {
        for (_entity, battery) in self.world.query_mut::<&mut Battery>() {
            battery.destroyed = true;
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(
                    self.status,
                    GameStatus::Start | GameStatus::Won | GameStatus::Lost
                ) {
                    // Full reset of the play field. The language selector is
                    // the one field that survives.
                    self.world.clear();
                    self.next_entity_id = 0;
                    self.score = 0;
                    self.level = 1;
                    self.time = SimTime::default();
                    world_setup::setup_defenses(&mut self.world, &mut self.next_entity_id);
                    self.status = GameStatus::Playing;
                }
            }
            PlayerCommand::Fire { target } => {
                if self.status == GameStatus::Playing {
                    systems::fire_control::try_fire(
                        &mut self.world,
                        target,
                        &mut self.next_entity_id,
                        &mut self.events,
                    );
                }
            }
            PlayerCommand::SetLanguage { language } => {
                self.language = language;
            }
        }
    }

    /// Run all systems in order. The order is load-bearing: explosions born
    /// from interceptor arrivals participate in this tick's rocket collision,
    /// and rocket spawning targets the post-damage set of live assets.
    fn run_systems(&mut self) {
        // 1-2. Straight-line advance for rockets and interceptors.
        systems::movement::run(&mut self.world);
        // 3. Interceptor arrival: detonate at the aim point.
        systems::arrival::run(
            &mut self.world,
            &mut self.next_entity_id,
            &mut self.despawn_buffer,
        );
        // 4. Explosion grow/fade lifecycle.
        systems::blast::run(&mut self.world, &mut self.despawn_buffer);
        // 5. Rockets caught inside explosions.
        systems::intercept::run(&mut self.world, &mut self.score, &mut self.events);
        // 6-7. Ground strikes, ground detonations, damage to cities/batteries.
        systems::impact::run(&mut self.world, &mut self.next_entity_id, &mut self.events);
        // 8. Probabilistic rocket spawning.
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            self.level,
            &mut self.next_entity_id,
        );
        // 9. Level progression and ammo refill.
        systems::progression::run(&mut self.world, self.score, &mut self.level, &mut self.events);
        // 10. Terminal check: win takes precedence over loss.
        self.check_terminal();
    }

    fn check_terminal(&mut self) {
        if self.score >= WIN_SCORE {
            self.status = GameStatus::Won;
            self.events.push(GameEvent::Victory { score: self.score });
            return;
        }

        let all_destroyed = {
            let mut query = self.world.query::<&Battery>();
            query.iter().all(|(_, battery)| battery.destroyed)
        };
        if all_destroyed {
            self.status = GameStatus::Lost;
            self.events.push(GameEvent::Defeat);
        }
    }
}
