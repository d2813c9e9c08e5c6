//! Timed actions — "подождать конец анимации и продолжить"
//!
//! Протокол одинаковый для wake/shoot/strong shoot/dash/damage:
//! enter state → запрос анимации → duration у хоста → arm таймера →
//! на одном из следующих тиков (накопленное время ≥ duration) → exit state.
//!
//! Здесь только планировщик (слот оставшегося времени на категорию).
//! Enter/exit эффекты живут в контроллере (`begin_timed` / `finish_timed`).

use super::host::PlayerAnimation;

/// Допуск на накопление float ошибки (10 × 0.1 ≠ 1.0 в f32)
pub const TIMER_EPSILON: f32 = 1e-4;

/// Категория timed action (не больше одного pending на категорию)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimedAction {
    Wake,
    Shoot,
    StrongShoot,
    Dash,
    Damage,
}

/// Как запросить анимацию у хоста
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCue {
    Play(PlayerAnimation),
    Trigger(PlayerAnimation),
}

impl TimedAction {
    pub const ALL: [TimedAction; 5] = [
        TimedAction::Wake,
        TimedAction::Shoot,
        TimedAction::StrongShoot,
        TimedAction::Dash,
        TimedAction::Damage,
    ];

    fn slot(self) -> usize {
        match self {
            Self::Wake => 0,
            Self::Shoot => 1,
            Self::StrongShoot => 2,
            Self::Dash => 3,
            Self::Damage => 4,
        }
    }

    pub fn cue(self) -> AnimationCue {
        match self {
            Self::Wake => AnimationCue::Trigger(PlayerAnimation::Wake),
            Self::Shoot => AnimationCue::Play(PlayerAnimation::Shoot),
            Self::StrongShoot => AnimationCue::Play(PlayerAnimation::StrongShoot),
            Self::Dash => AnimationCue::Play(PlayerAnimation::Dash),
            Self::Damage => AnimationCue::Trigger(PlayerAnimation::Damage),
        }
    }

    pub fn animation(self) -> PlayerAnimation {
        match self.cue() {
            AnimationCue::Play(animation) | AnimationCue::Trigger(animation) => animation,
        }
    }
}

/// Pending continuations: оставшееся время по категориям
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimedActions {
    pending: [Option<f32>; 5],
}

impl TimedActions {
    /// Arm (или перезапустить) continuation
    pub fn arm(&mut self, action: TimedAction, duration: f32) {
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        self.pending[action.slot()] = Some(duration);
    }

    pub fn is_pending(&self, action: TimedAction) -> bool {
        self.pending[action.slot()].is_some()
    }

    pub fn remaining(&self, action: TimedAction) -> Option<f32> {
        self.pending[action.slot()]
    }

    pub fn any_pending(&self) -> bool {
        self.pending.iter().any(Option::is_some)
    }

    /// Продвинуть время; возвращает завершившиеся actions (в порядке `ALL`)
    pub fn tick(&mut self, delta: f32) -> Vec<TimedAction> {
        let mut completed = Vec::new();

        for action in TimedAction::ALL {
            let slot = &mut self.pending[action.slot()];
            if let Some(remaining) = slot {
                *remaining -= delta;
                if *remaining <= TIMER_EPSILON {
                    *slot = None;
                    completed.push(action);
                }
            }
        }

        completed
    }

    /// Hard stop (смерть)
    pub fn cancel_all(&mut self) {
        self.pending = [None; 5];
    }
}
