//! Player control marker component

use bevy::prelude::Component;

/// Marker component для entity, которым управляет игрок
///
/// Systems игрока используют `With<Player>` filter. В single-player обычно
/// ровно один entity с этим компонентом.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
