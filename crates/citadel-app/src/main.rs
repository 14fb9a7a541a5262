//! Headless demo driver: plays one full CITADEL session with a naive
//! autopilot and logs the engine's events. `RUST_LOG=debug` for shot-by-shot
//! detail.

use std::sync::mpsc;

use citadel_app::game_loop;
use citadel_app::state::GameLoopCommand;
use citadel_core::commands::PlayerCommand;
use citadel_core::constants::{GAME_HEIGHT, NO_FIRE_BAND};
use citadel_core::enums::GameStatus;
use citadel_core::events::GameEvent;
use citadel_core::state::GameStateSnapshot;
use citadel_core::types::Point;

fn main() {
    env_logger::init();
    log::info!("CITADEL starting (headless demo)");

    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let cmd_tx = game_loop::spawn_game_loop(snapshot_tx);

    if cmd_tx
        .send(GameLoopCommand::Player(PlayerCommand::StartGame))
        .is_err()
    {
        log::error!("Game loop thread died before the game started");
        return;
    }

    for snapshot in snapshot_rx {
        for event in &snapshot.events {
            log_event(event);
        }

        match snapshot.status {
            GameStatus::Won | GameStatus::Lost => {
                log::info!(
                    "Session over: {:?} with score {} at level {}",
                    snapshot.status,
                    snapshot.score,
                    snapshot.level
                );
                let _ = cmd_tx.send(GameLoopCommand::Shutdown);
                break;
            }
            _ => {}
        }

        if let Some(order) = autopilot(&snapshot) {
            if cmd_tx.send(GameLoopCommand::Player(order)).is_err() {
                break;
            }
        }
    }
}

/// Naive gunner: lead the lowest rocket, keep a few rounds in the air.
fn autopilot(snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
    if snapshot.status != GameStatus::Playing || snapshot.interceptors.len() >= 3 {
        return None;
    }

    let rocket = snapshot
        .rockets
        .iter()
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))?;

    // Aim a few ticks ahead along the rocket's descent, staying above the
    // no-fire band.
    let lead_ticks = 12.0;
    let target = Point::new(
        rocket.position.x + rocket.angle.cos() * rocket.speed * lead_ticks,
        (rocket.position.y + rocket.angle.sin() * rocket.speed * lead_ticks)
            .min(GAME_HEIGHT - NO_FIRE_BAND - 1.0),
    );
    Some(PlayerCommand::Fire { target })
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::InterceptorAway { slot } => {
            log::debug!("Interceptor away from {:?}", slot);
        }
        GameEvent::RocketDestroyed { position, points } => {
            log::info!(
                "Rocket destroyed at ({:.0}, {:.0}), +{} points",
                position.x,
                position.y,
                points
            );
        }
        GameEvent::GroundImpact { position } => {
            log::debug!("Ground impact at ({:.0}, {:.0})", position.x, position.y);
        }
        GameEvent::CityDestroyed { id } => {
            log::warn!("City {} destroyed", id);
        }
        GameEvent::BatteryDestroyed { slot } => {
            log::warn!("Battery {:?} destroyed", slot);
        }
        GameEvent::LevelUp { level } => {
            log::info!("Level up: now at level {}", level);
        }
        GameEvent::Victory { score } => {
            log::info!("Victory! Final score {}", score);
        }
        GameEvent::Defeat => {
            log::info!("All batteries destroyed. Defense failed");
        }
    }
}
