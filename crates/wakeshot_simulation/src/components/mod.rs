//! Общие компоненты/value types
//!
//! - actor: ресурсы персонажа (Health, Ammo)
//! - player: player control marker (Player)

pub mod actor;
pub mod player;

pub use actor::*;
pub use player::*;
