//! Player action controller (ECS strategic layer)
//!
//! ECS ответственность:
//! - State machine действий: sleep/wake, движение, выстрелы, заряд, dash, урон, смерть
//! - Ресурсы: Health, Ammo, dash cooldown, charge timer
//!
//! Движок-хост ответственность:
//! - Animator (клипы, триггеры, длительности)
//! - Rigidbody (velocity integration, гравитация)
//! - Sprite flip, HUD, опрос устройств ввода
//!
//! Связь: RawPlayerInput (хост → ECS), HostCommandBuffer (ECS → хост),
//! PlayerDamageIntent / PlayerDied события.

use bevy::prelude::*;

pub mod config;
pub mod controller;
pub mod events;
pub mod host;
pub mod input;
pub mod state;
pub mod systems;
pub mod timed;


pub use config::{ChargeGate, DashMovement, PlayerConfig, NORMAL_SHOT_COST, STRONG_SHOT_COST};
pub use controller::{DamageOutcome, PlayerActionController, PlayerStatus, Rejection};
pub use events::{PlayerDamageIntent, PlayerDied};
pub use host::{AnimationClipLengths, HostCommand, HostCommandBuffer, PlayerAnimation, PlayerHost};
pub use input::{InputTracker, PlayerInput, RawPlayerInput};
pub use state::ActionState;
pub use systems::{advance_player_controllers, apply_player_damage};
pub use timed::{TimedAction, TimedActions};

use crate::components::Player;

/// Всё, что нужно entity игрока
#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub controller: PlayerActionController,
    pub raw_input: RawPlayerInput,
    pub tracker: InputTracker,
    pub host: HostCommandBuffer,
}

impl PlayerBundle {
    /// Контроллер спавнится сразу: "sleep" анимация уже лежит в буфере команд
    pub fn new(config: PlayerConfig, clip_lengths: AnimationClipLengths) -> Self {
        let mut host = HostCommandBuffer::new(clip_lengths);
        let controller = PlayerActionController::spawn(config, &mut host);

        Self {
            player: Player,
            controller,
            raw_input: RawPlayerInput::default(),
            tracker: InputTracker::default(),
            host,
        }
    }
}

impl Default for PlayerBundle {
    fn default() -> Self {
        Self::new(PlayerConfig::default(), AnimationClipLengths::default())
    }
}

/// Player Plugin
///
/// Регистрирует события и системы игрока в FixedUpdate.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerDamageIntent>()
            .add_event::<PlayerDied>();

        app.add_systems(
            FixedUpdate,
            (advance_player_controllers, apply_player_damage).chain(),
        );
    }
}
