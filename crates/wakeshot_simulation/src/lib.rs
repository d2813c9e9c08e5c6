//! WAKESHOT Simulation Core
//!
//! Headless логика 2D платформера: state machine действий игрока
//! (sleep/wake, ходьба/бег, выстрел/заряд/strong shot, dash, урон, смерть).
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (state machine, health, ammo, cooldowns)
//! - Движок-хост = tactical layer (animator, rigidbody, sprite, input devices)

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

pub mod components;
pub mod logger;
pub mod player;

pub use components::*;
pub use logger::*;
pub use player::{
    ActionState, AnimationClipLengths, ChargeGate, DamageOutcome, DashMovement, HostCommand,
    HostCommandBuffer, PlayerActionController, PlayerAnimation, PlayerBundle, PlayerConfig,
    PlayerDamageIntent, PlayerDied, PlayerHost, PlayerInput, PlayerPlugin, PlayerStatus,
    RawPlayerInput,
};

/// Fixed timestep симуляции
pub const SIMULATION_HZ: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .add_plugins(PlayerPlugin);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время идёт ручными шагами по 1/60s на `app.update()`, поэтому прогон не
/// зависит от скорости машины.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / SIMULATION_HZ,
        )));

    app
}
