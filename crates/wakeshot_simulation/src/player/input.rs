//! Player input snapshot
//!
//! Хост (Godot/любой движок) опрашивает устройства сам. В симуляцию попадает
//! только snapshot на тик:
//! - `PlayerInput` — готовые edges (down/held/up), если хост их уже считает
//! - `RawPlayerInput` — "зажата ли кнопка сейчас"; edges выводит `InputTracker`

use bevy::prelude::*;

/// Input на один тик симуляции (read-only для контроллера)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerInput {
    /// Горизонтальная ось: -1.0 (влево) → +1.0 (вправо)
    pub horizontal_axis: f32,
    /// Run modifier (Shift)
    pub run_held: bool,
    /// Fire: rising edge в этом тике
    pub fire_pressed: bool,
    /// Fire: зажата
    pub fire_held: bool,
    /// Fire: falling edge в этом тике
    pub fire_released: bool,
    /// Dash: rising edge в этом тике
    pub dash_pressed: bool,
}

impl PlayerInput {
    /// Ось, приведённая к [-1, 1]; NaN/inf → 0
    pub fn axis(&self) -> f32 {
        if self.horizontal_axis.is_finite() {
            self.horizontal_axis.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn moving(horizontal_axis: f32) -> Self {
        Self {
            horizontal_axis,
            ..Default::default()
        }
    }

    pub fn running(horizontal_axis: f32) -> Self {
        Self {
            horizontal_axis,
            run_held: true,
            ..Default::default()
        }
    }

    pub fn fire_down() -> Self {
        Self {
            fire_pressed: true,
            fire_held: true,
            ..Default::default()
        }
    }

    pub fn fire_hold() -> Self {
        Self {
            fire_held: true,
            ..Default::default()
        }
    }

    pub fn fire_up() -> Self {
        Self {
            fire_released: true,
            ..Default::default()
        }
    }

    pub fn dash() -> Self {
        Self {
            dash_pressed: true,
            ..Default::default()
        }
    }
}

/// Сырые состояния кнопок (пишет хост каждый frame)
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct RawPlayerInput {
    pub horizontal_axis: f32,
    pub run_held: bool,
    pub fire_held: bool,
    pub dash_held: bool,
}

/// Предыдущее состояние кнопок → edges
///
/// `sample()` вызывается ровно один раз на тик симуляции, иначе edges
/// потеряются (или задвоятся).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct InputTracker {
    fire_was_held: bool,
    dash_was_held: bool,
}

impl InputTracker {
    pub fn sample(&mut self, raw: &RawPlayerInput) -> PlayerInput {
        let input = PlayerInput {
            horizontal_axis: raw.horizontal_axis,
            run_held: raw.run_held,
            fire_pressed: raw.fire_held && !self.fire_was_held,
            fire_held: raw.fire_held,
            fire_released: !raw.fire_held && self.fire_was_held,
            dash_pressed: raw.dash_held && !self.dash_was_held,
        };

        self.fire_was_held = raw.fire_held;
        self.dash_was_held = raw.dash_held;

        input
    }
}
