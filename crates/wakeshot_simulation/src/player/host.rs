//! Host capability interface
//!
//! HYBRID ARCHITECTURE:
//! - Симуляция = решает, какую анимацию/velocity запросить
//! - Движок-хост = animator, rigidbody, sprite renderer
//!
//! Контроллер видит движок только через `PlayerHost`. ECS-вариант хоста —
//! `HostCommandBuffer`: копит команды, движок их забирает каждый frame.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Логические анимации персонажа
///
/// Имена клипов/триггеров — конфигурация хоста, не семантика; дефолтные
/// имена совпадают с исходным animator controller'ом.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAnimation {
    Sleep,
    Wake,
    Idle,
    Walk,
    Run,
    Shoot,
    Charge,
    StrongShoot,
    Dash,
    Damage,
    Death,
}

impl PlayerAnimation {
    pub fn clip_name(self) -> &'static str {
        match self {
            Self::Sleep => "Sleep_player",
            Self::Wake => "Wake_player",
            Self::Idle => "idle_player",
            Self::Walk => "Walk_player",
            Self::Run => "Run_player",
            Self::Shoot => "Shoot_player",
            Self::Charge => "Charge_player",
            Self::StrongShoot => "Strong_Shoot_player",
            Self::Dash => "Dash_player",
            Self::Damage => "damage_player",
            Self::Death => "Death_player",
        }
    }

    /// Animator trigger (у looping locomotion клипов триггера нет)
    pub fn trigger_name(self) -> Option<&'static str> {
        match self {
            Self::Sleep | Self::Idle | Self::Walk | Self::Run => None,
            Self::Wake => Some("TriggerWake"),
            Self::Shoot => Some("TriggerShoot"),
            Self::Charge => Some("TriggerCharge"),
            Self::StrongShoot => Some("TriggerStrongShoot"),
            Self::Dash => Some("TriggerDash"),
            Self::Damage => Some("TriggerDamage"),
            Self::Death => Some("TriggerDeath"),
        }
    }
}

/// Что контроллер умеет просить у движка
pub trait PlayerHost {
    fn play_animation(&mut self, animation: PlayerAnimation);

    fn set_trigger(&mut self, animation: PlayerAnimation);

    /// Длительность анимации, запрошенной последней (секунды)
    fn current_animation_duration(&self) -> f32;

    /// Текущая вертикальная скорость (гравитация/прыжок — забота физики хоста)
    fn vertical_velocity(&self) -> f32;

    fn set_velocity(&mut self, velocity: Vec2);

    /// Animator parameter "speed"
    fn set_speed_parameter(&mut self, speed: f32);

    fn set_facing_flip(&mut self, flip: bool);
}

/// Команда для движка (ECS → хост)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    PlayAnimation(PlayerAnimation),
    SetTrigger(PlayerAnimation),
    SetVelocity(Vec2),
    SetSpeedParameter(f32),
    SetFacingFlip(bool),
}

/// Длины клипов, которые движок сообщает симуляции
///
/// Клипы без явной длины используют `fallback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationClipLengths {
    pub fallback: f32,
    pub clips: HashMap<PlayerAnimation, f32>,
}

impl Default for AnimationClipLengths {
    fn default() -> Self {
        let clips = [
            (PlayerAnimation::Wake, 0.4),
            (PlayerAnimation::Shoot, 0.3),
            (PlayerAnimation::StrongShoot, 0.6),
            (PlayerAnimation::Dash, 0.35),
            (PlayerAnimation::Damage, 0.25),
            (PlayerAnimation::Death, 1.0),
        ]
        .into_iter()
        .collect();

        Self {
            fallback: 0.5,
            clips,
        }
    }
}

impl AnimationClipLengths {
    /// Все клипы одной длины
    pub fn uniform(length: f32) -> Self {
        Self {
            fallback: length,
            clips: HashMap::new(),
        }
    }

    pub fn with(mut self, animation: PlayerAnimation, length: f32) -> Self {
        self.clips.insert(animation, length);
        self
    }

    pub fn length(&self, animation: PlayerAnimation) -> f32 {
        self.clips
            .get(&animation)
            .copied()
            .unwrap_or(self.fallback)
            .max(0.0)
    }
}

/// Буфер команд для движка (ECS вариант `PlayerHost`)
///
/// Движок каждый frame:
/// 1. обновляет `vertical_velocity` из rigidbody
/// 2. `drain()` → применяет команды к animator/rigidbody/sprite
#[derive(Component, Debug, Clone, Default)]
pub struct HostCommandBuffer {
    pub clip_lengths: AnimationClipLengths,
    pub vertical_velocity: f32,
    last_requested: Option<PlayerAnimation>,
    commands: Vec<HostCommand>,
}

impl HostCommandBuffer {
    pub fn new(clip_lengths: AnimationClipLengths) -> Self {
        Self {
            clip_lengths,
            ..Default::default()
        }
    }

    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, HostCommand> {
        self.commands.drain(..)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Все запросы анимаций (play + trigger) по порядку
    pub fn animations(&self) -> Vec<PlayerAnimation> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                HostCommand::PlayAnimation(animation) | HostCommand::SetTrigger(animation) => {
                    Some(*animation)
                }
                _ => None,
            })
            .collect()
    }

    /// Сколько раз запрашивалась анимация (play или trigger)
    pub fn animation_requests(&self, animation: PlayerAnimation) -> usize {
        self.animations()
            .into_iter()
            .filter(|requested| *requested == animation)
            .count()
    }

    pub fn last_velocity(&self) -> Option<Vec2> {
        self.commands.iter().rev().find_map(|command| match command {
            HostCommand::SetVelocity(velocity) => Some(*velocity),
            _ => None,
        })
    }

    pub fn last_speed_parameter(&self) -> Option<f32> {
        self.commands.iter().rev().find_map(|command| match command {
            HostCommand::SetSpeedParameter(speed) => Some(*speed),
            _ => None,
        })
    }

    pub fn last_facing_flip(&self) -> Option<bool> {
        self.commands.iter().rev().find_map(|command| match command {
            HostCommand::SetFacingFlip(flip) => Some(*flip),
            _ => None,
        })
    }
}

impl PlayerHost for HostCommandBuffer {
    fn play_animation(&mut self, animation: PlayerAnimation) {
        self.last_requested = Some(animation);
        self.commands.push(HostCommand::PlayAnimation(animation));
    }

    fn set_trigger(&mut self, animation: PlayerAnimation) {
        self.last_requested = Some(animation);
        self.commands.push(HostCommand::SetTrigger(animation));
    }

    fn current_animation_duration(&self) -> f32 {
        self.last_requested
            .map(|animation| self.clip_lengths.length(animation))
            .unwrap_or(0.0)
    }

    fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.commands.push(HostCommand::SetVelocity(velocity));
    }

    fn set_speed_parameter(&mut self, speed: f32) {
        self.commands.push(HostCommand::SetSpeedParameter(speed));
    }

    fn set_facing_flip(&mut self, flip: bool) {
        self.commands.push(HostCommand::SetFacingFlip(flip));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_lengths_fallback() {
        let lengths = AnimationClipLengths::uniform(0.2).with(PlayerAnimation::Dash, 0.7);
        assert_eq!(lengths.length(PlayerAnimation::Dash), 0.7);
        assert_eq!(lengths.length(PlayerAnimation::Shoot), 0.2);
    }

    #[test]
    fn test_clip_lengths_never_negative() {
        let lengths = AnimationClipLengths::uniform(-1.0);
        assert_eq!(lengths.length(PlayerAnimation::Wake), 0.0);
    }

    #[test]
    fn test_buffer_reports_duration_of_last_request() {
        let mut buffer = HostCommandBuffer::new(
            AnimationClipLengths::uniform(0.5).with(PlayerAnimation::Shoot, 0.3),
        );
        assert_eq!(buffer.current_animation_duration(), 0.0);

        buffer.play_animation(PlayerAnimation::Walk);
        assert_eq!(buffer.current_animation_duration(), 0.5);

        buffer.set_trigger(PlayerAnimation::Shoot);
        assert_eq!(buffer.current_animation_duration(), 0.3);
    }

    #[test]
    fn test_buffer_queries_and_drain() {
        let mut buffer = HostCommandBuffer::default();
        buffer.play_animation(PlayerAnimation::Idle);
        buffer.set_velocity(Vec2::new(1.0, -2.0));
        buffer.set_facing_flip(true);
        buffer.set_trigger(PlayerAnimation::Damage);
        buffer.set_velocity(Vec2::new(3.0, 0.0));

        assert_eq!(
            buffer.animations(),
            vec![PlayerAnimation::Idle, PlayerAnimation::Damage]
        );
        assert_eq!(buffer.animation_requests(PlayerAnimation::Damage), 1);
        assert_eq!(buffer.last_velocity(), Some(Vec2::new(3.0, 0.0)));
        assert_eq!(buffer.last_facing_flip(), Some(true));
        assert_eq!(buffer.last_speed_parameter(), None);

        assert_eq!(buffer.drain().count(), 5);
        assert!(buffer.commands().is_empty());
    }

    #[test]
    fn test_default_animation_names() {
        assert_eq!(PlayerAnimation::StrongShoot.clip_name(), "Strong_Shoot_player");
        assert_eq!(PlayerAnimation::Death.trigger_name(), Some("TriggerDeath"));
        assert_eq!(PlayerAnimation::Run.trigger_name(), None);
    }
}
