//! Game loop thread — runs the simulation engine at the fixed tick rate.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via an `mpsc` channel; every tick's snapshot
//! is pushed into the snapshot channel for the driver to consume.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use citadel_core::constants::TICK_RATE;
use citadel_core::state::GameStateSnapshot;
use citadel_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the driver to use.
pub fn spawn_game_loop(
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("citadel-game-loop".into())
        .spawn(move || {
            run_game_loop(cmd_rx, snapshot_tx);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
) {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles status gating internally)
        let snapshot = engine.tick();

        // 3. Emit the snapshot; a closed receiver means nobody is watching
        if snapshot_tx.send(snapshot).is_err() {
            return;
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
