//! Player systems (FixedUpdate)
//!
//! Порядок (chain):
//! 1. advance_player_controllers — input → state machine → HostCommandBuffer
//! 2. apply_player_damage — PlayerDamageIntent → health → PlayerDied

use bevy::prelude::*;

use super::controller::{DamageOutcome, PlayerActionController};
use super::events::{PlayerDamageIntent, PlayerDied};
use super::host::HostCommandBuffer;
use super::input::{InputTracker, RawPlayerInput};
use crate::components::Player;

/// System: один тик state machine для каждого игрока
///
/// `Time` внутри FixedUpdate — fixed timestep (60Hz).
pub fn advance_player_controllers(
    time: Res<Time>,
    mut players: Query<
        (
            &mut PlayerActionController,
            &RawPlayerInput,
            &mut InputTracker,
            &mut HostCommandBuffer,
        ),
        With<Player>,
    >,
) {
    let delta = time.delta_secs();

    for (mut controller, raw_input, mut tracker, mut host) in players.iter_mut() {
        // Edges считаем и для мёртвых/спящих, чтобы после пробуждения
        // зажатая кнопка не дала ложный rising edge
        let input = tracker.sample(raw_input);
        controller.advance(delta, &input, &mut *host);
    }
}

/// System: внешний урон → controller
pub fn apply_player_damage(
    mut damage_events: EventReader<PlayerDamageIntent>,
    mut died_events: EventWriter<PlayerDied>,
    mut players: Query<(&mut PlayerActionController, &mut HostCommandBuffer), With<Player>>,
) {
    for intent in damage_events.read() {
        let Ok((mut controller, mut host)) = players.get_mut(intent.target) else {
            crate::log_warning(&format!(
                "PlayerDamageIntent: target {:?} is not a player",
                intent.target
            ));
            continue;
        };

        if controller.apply_damage(intent.amount, &mut *host) == DamageOutcome::Killed {
            died_events.write(PlayerDied {
                entity: intent.target,
            });
            crate::log_info(&format!("Player {:?} killed", intent.target));
        }
    }
}
