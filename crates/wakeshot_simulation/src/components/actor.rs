//! Ресурсы персонажа: Health, Ammo
//!
//! Оба типа принадлежат контроллеру эксклюзивно и меняются только через
//! clamping-арифметику (никаких ошибок, никаких underflow).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Здоровье персонажа
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// current = clamp(current − amount, 0, max)
    ///
    /// Отрицательный amount лечит (но не выше max).
    pub fn apply_damage(&mut self, amount: i32) {
        let next = i64::from(self.current) - i64::from(amount);
        self.current = next.clamp(0, i64::from(self.max)) as u32;
    }

    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }
}

/// Боезапас (количество выстрелов)
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct Ammo {
    pub current: u32,
    pub max: u32,
}

impl Default for Ammo {
    fn default() -> Self {
        Self::new(30)
    }
}

impl Ammo {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.current >= cost
    }

    /// Списать cost если хватает; иначе ничего не меняем
    pub fn consume(&mut self, cost: u32) -> bool {
        if self.can_afford(cost) {
            self.current -= cost;
            true
        } else {
            false
        }
    }

    /// Перезарядка до max. Возвращает true если что-то изменилось.
    pub fn refill(&mut self) -> bool {
        let changed = self.current != self.max;
        self.current = self.max;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage() {
        let mut health = Health::new(100);
        assert_eq!(health.current, 100);

        health.apply_damage(30);
        assert_eq!(health.current, 70);
        assert!(health.is_alive());

        health.apply_damage(150); // Clamp к 0
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());
    }

    #[test]
    fn test_health_negative_damage_heals_up_to_max() {
        let mut health = Health::new(100);
        health.apply_damage(40);

        health.apply_damage(-25);
        assert_eq!(health.current, 85);

        health.apply_damage(-1000);
        assert_eq!(health.current, 100);
    }

    #[test]
    fn test_health_extreme_amounts() {
        let mut health = Health::new(u32::MAX);
        health.apply_damage(i32::MIN);
        assert_eq!(health.current, u32::MAX);

        health.apply_damage(i32::MAX);
        assert_eq!(health.current, u32::MAX - i32::MAX as u32);
    }

    #[test]
    fn test_health_heal() {
        let mut health = Health::new(100);
        health.apply_damage(50);

        health.heal(30);
        assert_eq!(health.current, 80);

        health.heal(100);
        assert_eq!(health.current, 100);
    }

    #[test]
    fn test_ammo_consume() {
        let mut ammo = Ammo::new(6);

        assert!(ammo.consume(5));
        assert_eq!(ammo.current, 1);

        assert!(!ammo.consume(5)); // Недостаточно
        assert_eq!(ammo.current, 1); // Не изменилось

        assert!(ammo.consume(1));
        assert_eq!(ammo.current, 0);
        assert!(!ammo.consume(1));
    }

    #[test]
    fn test_ammo_refill() {
        let mut ammo = Ammo::new(30);
        assert!(!ammo.refill());

        ammo.consume(7);
        assert!(ammo.refill());
        assert_eq!(ammo.current, 30);
    }
}
