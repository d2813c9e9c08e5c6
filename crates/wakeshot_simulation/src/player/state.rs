//! Состояния контроллера игрока
//!
//! Внутри контроллер хранит фазу жизненного цикла + overlay флаги
//! (shot/charging/dashing/damaged) поверх locomotion. Наружу отдаётся одно
//! `ActionState` — см. `PlayerActionController::state()`.

use serde::{Deserialize, Serialize};

use super::host::PlayerAnimation;

/// Наблюдаемое состояние персонажа (ровно одно активно)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionState {
    Asleep,
    Waking,
    Idle,
    Walking,
    Running,
    Shooting,
    Charging,
    StrongShooting,
    Dashing,
    Damaged,
    Dead,
}

impl ActionState {
    /// Idle-capable: персонаж проснулся, жив и ничем не занят
    pub fn is_idle_capable(self) -> bool {
        matches!(self, Self::Idle | Self::Walking | Self::Running)
    }
}

/// Фаза жизненного цикла
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Спим wake_delay секунд после спавна
    #[default]
    Asleep,
    /// Играет wake анимация, input игнорируется
    Waking,
    Awake,
    /// Терминальное состояние
    Dead,
}

/// Базовое движение (под overlay'ями)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locomotion {
    #[default]
    Idle,
    Walking,
    Running,
}

impl Locomotion {
    pub fn animation(self) -> PlayerAnimation {
        match self {
            Self::Idle => PlayerAnimation::Idle,
            Self::Walking => PlayerAnimation::Walk,
            Self::Running => PlayerAnimation::Run,
        }
    }
}

impl From<Locomotion> for ActionState {
    fn from(locomotion: Locomotion) -> Self {
        match locomotion {
            Locomotion::Idle => Self::Idle,
            Locomotion::Walking => Self::Walking,
            Locomotion::Running => Self::Running,
        }
    }
}

/// Какой выстрел сейчас проигрывается
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotKind {
    Normal,
    Strong,
}
