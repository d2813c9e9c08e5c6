//! Параметры контроллера игрока
//!
//! Все значения неизменны на время жизни контроллера. Дефолты — тюнинг
//! исходного персонажа (walk 2, run 5, dash cooldown 5s, charge 2s, 100 HP, 30 патронов).

use serde::{Deserialize, Serialize};

/// Стоимость выстрелов (патроны)
pub const NORMAL_SHOT_COST: u32 = 1;
pub const STRONG_SHOT_COST: u32 = 5;

/// Когда проверяется ammo для заряженного выстрела
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChargeGate {
    /// Заряд копится всегда, ammo ≥ 5 проверяется только при отпускании
    #[default]
    AtRelease,
    /// Заряд копится только если ammo ≥ 5 (и всё равно проверяется при отпускании)
    BeforeCharging,
}

/// Влияет ли dash на горизонтальную скорость
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DashMovement {
    /// Dash — только анимационный overlay, velocity считается как обычно
    #[default]
    OverlayAnimation,
    /// Пока идёт dash, горизонтальная velocity = 0
    SuppressVelocity,
}

/// Конфигурация PlayerActionController
///
/// `#[serde(default)]` — хост может загрузить частичный конфиг,
/// недостающие поля берутся из `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Скорость ходьбы (units/sec)
    pub walk_speed: f32,
    /// Скорость бега (run modifier зажат)
    pub run_speed: f32,
    /// Cooldown после окончания dash анимации (секунды)
    pub dash_cooldown: f32,
    /// Сколько держать fire до входа в Charging (секунды)
    pub charge_time: f32,
    pub max_health: u32,
    pub max_ammo: u32,
    /// Сколько персонаж спит до wake анимации (секунды)
    pub wake_delay: f32,
    /// |axis| ≤ deadzone → стоим
    pub deadzone: f32,
    pub charge_gate: ChargeGate,
    pub dash_movement: DashMovement,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 5.0,
            dash_cooldown: 5.0,
            charge_time: 2.0,
            max_health: 100,
            max_ammo: 30,
            wake_delay: 1.0,
            deadzone: 0.1,
            charge_gate: ChargeGate::AtRelease,
            dash_movement: DashMovement::OverlayAnimation,
        }
    }
}

impl PlayerConfig {
    /// Нормализует значения из внешнего конфига: отрицательные/NaN времена и
    /// скорости → 0, max_health ≥ 1 (иначе персонаж родился бы мёртвым).
    pub fn sanitized(mut self) -> Self {
        self.walk_speed = non_negative(self.walk_speed);
        self.run_speed = non_negative(self.run_speed);
        self.dash_cooldown = non_negative(self.dash_cooldown);
        self.charge_time = non_negative(self.charge_time);
        self.wake_delay = non_negative(self.wake_delay);
        self.deadzone = non_negative(self.deadzone);
        self.max_health = self.max_health.max(1);
        self
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
