//! Player events (combat ↔ controller)

use bevy::prelude::*;

/// Event: урон игроку (collision/combat системы → controller)
///
/// Отрицательный amount лечит. По мёртвому игроку событие игнорируется.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PlayerDamageIntent {
    pub target: Entity,
    pub amount: i32,
}

/// Event: игрок умер (controller → UI/game flow)
///
/// Генерируется ровно один раз на entity.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PlayerDied {
    pub entity: Entity,
}
