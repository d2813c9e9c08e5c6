//! PlayerActionController — state machine действий игрока
//!
//! Один `advance(dt, input, host)` на тик симуляции:
//! 1. Asleep/Waking — крутится только wake расписание, input игнорируется
//! 2. Dead — no-op навсегда
//! 3. Awake — cooldown → завершение timed actions → dash → shoot → movement
//!
//! Приоритет dash > shoot > move: пока идёт dash, fire игнорируется, но
//! velocity движения считается (dash — overlay анимации, см. `DashMovement`).
//!
//! Отказы (нет патронов, cooldown, уже занят) — нормальный flow, а не ошибки:
//! состояние не меняется, причина уходит в debug лог.

use bevy::prelude::*;
use serde::Serialize;

use super::config::{
    ChargeGate, DashMovement, PlayerConfig, NORMAL_SHOT_COST, STRONG_SHOT_COST,
};
use super::host::{PlayerAnimation, PlayerHost};
use super::input::PlayerInput;
use super::state::{ActionState, Lifecycle, Locomotion, ShotKind};
use super::timed::{AnimationCue, TimedAction, TimedActions, TIMER_EPSILON};
use crate::components::{Ammo, Health};

/// Почему действие не выполнилось (только для логов)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InsufficientAmmo { required: u32, available: u32 },
    DashOnCooldown,
    AlreadyDashing,
    AlreadyShooting,
}

/// Результат `apply_damage`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Контроллер уже мёртв
    Ignored,
    Hurt,
    /// Health дошло до 0, контроллер перешёл в Dead
    Killed,
}

/// Snapshot для HUD (health/ammo bars, dash indicator)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerStatus {
    pub state: ActionState,
    pub health: Health,
    pub ammo: Ammo,
    pub dash_cooldown_remaining: f32,
    pub charge_elapsed: f32,
    pub facing_left: bool,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct PlayerActionController {
    config: PlayerConfig,
    lifecycle: Lifecycle,
    locomotion: Locomotion,
    shot: Option<ShotKind>,
    charging: bool,
    dashing: bool,
    damaged: bool,
    health: Health,
    ammo: Ammo,
    sleep_remaining: f32,
    dash_cooldown_timer: f32,
    charge_timer: f32,
    timers: TimedActions,
    /// Последняя запрошенная анимация (чтобы не спамить хост одинаковыми play)
    current_animation: Option<PlayerAnimation>,
    facing_left: bool,
}

impl PlayerActionController {
    /// Спавн: full health/ammo, Asleep, запрос "sleep" анимации
    pub fn spawn<H: PlayerHost + ?Sized>(config: PlayerConfig, host: &mut H) -> Self {
        let config = config.sanitized();
        host.play_animation(PlayerAnimation::Sleep);

        Self {
            lifecycle: Lifecycle::Asleep,
            locomotion: Locomotion::Idle,
            shot: None,
            charging: false,
            dashing: false,
            damaged: false,
            health: Health::new(config.max_health),
            ammo: Ammo::new(config.max_ammo),
            sleep_remaining: config.wake_delay,
            dash_cooldown_timer: 0.0,
            charge_timer: 0.0,
            timers: TimedActions::default(),
            current_animation: Some(PlayerAnimation::Sleep),
            facing_left: false,
            config,
        }
    }

    pub fn advance<H: PlayerHost + ?Sized>(
        &mut self,
        delta: f32,
        input: &PlayerInput,
        host: &mut H,
    ) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };

        match self.lifecycle {
            Lifecycle::Dead => return,
            Lifecycle::Asleep => {
                self.resolve_timers(delta);
                self.tick_sleep(delta, host);
                return;
            }
            Lifecycle::Waking => {
                self.resolve_timers(delta);
                return;
            }
            Lifecycle::Awake => {}
        }

        self.dash_cooldown_timer = (self.dash_cooldown_timer - delta).max(0.0);
        self.resolve_timers(delta);

        if input.dash_pressed {
            if let Err(rejection) = self.try_dash(host) {
                self.log_rejection(rejection);
            }
        }

        if !self.dashing {
            self.handle_shooting(delta, input, host);
        }

        self.handle_movement(input, host);
    }

    /// Внешний урон (коллизии/бой). Отрицательный amount лечит.
    pub fn apply_damage<H: PlayerHost + ?Sized>(
        &mut self,
        amount: i32,
        host: &mut H,
    ) -> DamageOutcome {
        if self.is_dead() {
            return DamageOutcome::Ignored;
        }

        let before = self.health.current;
        self.health.apply_damage(amount);
        self.damaged = true;
        self.begin_timed(TimedAction::Damage, host);

        crate::log(&format!(
            "Player took {} damage (HP: {} → {})",
            amount, before, self.health.current
        ));

        if self.health.is_alive() {
            DamageOutcome::Hurt
        } else {
            self.die(host);
            DamageOutcome::Killed
        }
    }

    /// One-way и идемпотентно: повторные вызовы ничего не делают
    pub fn die<H: PlayerHost + ?Sized>(&mut self, host: &mut H) {
        if self.is_dead() {
            return;
        }

        self.lifecycle = Lifecycle::Dead;
        self.timers.cancel_all();
        self.shot = None;
        self.charging = false;
        self.charge_timer = 0.0;
        self.dashing = false;
        self.damaged = false;
        self.locomotion = Locomotion::Idle;

        host.set_trigger(PlayerAnimation::Death);
        self.current_animation = Some(PlayerAnimation::Death);
        let vertical = host.vertical_velocity();
        host.set_velocity(Vec2::new(0.0, vertical));

        crate::log_info("Player died");
    }

    /// Перезарядка до max_ammo. false если мёртв или магазин уже полон.
    pub fn reload(&mut self) -> bool {
        if self.is_dead() {
            return false;
        }

        let changed = self.ammo.refill();
        if changed {
            crate::log(&format!("Player reloaded ({} rounds)", self.ammo.current));
        }
        changed
    }

    pub fn state(&self) -> ActionState {
        match self.lifecycle {
            Lifecycle::Asleep => ActionState::Asleep,
            Lifecycle::Waking => ActionState::Waking,
            Lifecycle::Dead => ActionState::Dead,
            Lifecycle::Awake => {
                if self.dashing {
                    ActionState::Dashing
                } else {
                    match self.shot {
                        Some(ShotKind::Strong) => ActionState::StrongShooting,
                        Some(ShotKind::Normal) => ActionState::Shooting,
                        None if self.charging => ActionState::Charging,
                        None if self.damaged => ActionState::Damaged,
                        None => self.locomotion.into(),
                    }
                }
            }
        }
    }

    pub fn status(&self) -> PlayerStatus {
        PlayerStatus {
            state: self.state(),
            health: self.health,
            ammo: self.ammo,
            dash_cooldown_remaining: self.dash_cooldown_timer,
            charge_elapsed: self.charge_timer,
            facing_left: self.facing_left,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn ammo(&self) -> Ammo {
        self.ammo
    }

    pub fn dash_cooldown_remaining(&self) -> f32 {
        self.dash_cooldown_timer
    }

    pub fn charge_elapsed(&self) -> f32 {
        self.charge_timer
    }

    pub fn is_awake(&self) -> bool {
        self.lifecycle == Lifecycle::Awake
    }

    pub fn is_dead(&self) -> bool {
        self.lifecycle == Lifecycle::Dead
    }

    pub fn is_shooting(&self) -> bool {
        self.shot.is_some()
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    pub fn is_dashing(&self) -> bool {
        self.dashing
    }

    pub fn facing_left(&self) -> bool {
        self.facing_left
    }

    pub fn timers(&self) -> &TimedActions {
        &self.timers
    }

    fn tick_sleep<H: PlayerHost + ?Sized>(&mut self, delta: f32, host: &mut H) {
        self.sleep_remaining = (self.sleep_remaining - delta).max(0.0);

        if self.sleep_remaining <= TIMER_EPSILON {
            self.lifecycle = Lifecycle::Waking;
            self.begin_timed(TimedAction::Wake, host);
        }
    }

    fn resolve_timers(&mut self, delta: f32) {
        for action in self.timers.tick(delta) {
            self.finish_timed(action);
        }
    }

    /// Enter half протокола: анимация → duration у хоста → arm continuation
    fn begin_timed<H: PlayerHost + ?Sized>(&mut self, action: TimedAction, host: &mut H) {
        match action.cue() {
            AnimationCue::Play(animation) => host.play_animation(animation),
            AnimationCue::Trigger(animation) => host.set_trigger(animation),
        }
        self.current_animation = Some(action.animation());

        let duration = host.current_animation_duration();
        self.timers.arm(action, duration);

        crate::log(&format!("Player {:?} started ({:.2}s)", action, duration));
    }

    /// Exit half протокола. Последний кадр анимации держится, пока
    /// следующий тик не запросит locomotion анимацию.
    fn finish_timed(&mut self, action: TimedAction) {
        match action {
            TimedAction::Wake => {
                self.lifecycle = Lifecycle::Awake;
                crate::log_info("Player awake");
            }
            TimedAction::Shoot | TimedAction::StrongShoot => {
                self.shot = None;
            }
            TimedAction::Dash => {
                self.dashing = false;
                self.dash_cooldown_timer = self.config.dash_cooldown;
            }
            TimedAction::Damage => {
                self.damaged = false;
            }
        }
    }

    fn try_dash<H: PlayerHost + ?Sized>(&mut self, host: &mut H) -> Result<(), Rejection> {
        if self.dashing {
            return Err(Rejection::AlreadyDashing);
        }
        if self.dash_cooldown_timer > 0.0 {
            return Err(Rejection::DashOnCooldown);
        }

        // Dash перебивает заряд: release во время dash'а всё равно был бы проигнорирован
        self.charging = false;
        self.charge_timer = 0.0;

        self.dashing = true;
        self.begin_timed(TimedAction::Dash, host);
        Ok(())
    }

    fn handle_shooting<H: PlayerHost + ?Sized>(
        &mut self,
        delta: f32,
        input: &PlayerInput,
        host: &mut H,
    ) {
        let result = if input.fire_pressed {
            self.try_normal_shot(host)
        } else if input.fire_held {
            self.accumulate_charge(delta, host);
            Ok(())
        } else if input.fire_released {
            self.release_charge(host)
        } else {
            Ok(())
        };

        if let Err(rejection) = result {
            self.log_rejection(rejection);
        }
    }

    fn try_normal_shot<H: PlayerHost + ?Sized>(&mut self, host: &mut H) -> Result<(), Rejection> {
        if self.shot.is_some() {
            return Err(Rejection::AlreadyShooting);
        }
        if !self.ammo.consume(NORMAL_SHOT_COST) {
            return Err(self.insufficient_ammo(NORMAL_SHOT_COST));
        }

        self.shot = Some(ShotKind::Normal);
        self.begin_timed(TimedAction::Shoot, host);
        Ok(())
    }

    fn accumulate_charge<H: PlayerHost + ?Sized>(&mut self, delta: f32, host: &mut H) {
        if self.shot.is_some() || self.charging {
            return;
        }
        if self.config.charge_gate == ChargeGate::BeforeCharging
            && !self.ammo.can_afford(STRONG_SHOT_COST)
        {
            return;
        }

        self.charge_timer += delta;
        if self.charge_timer >= self.config.charge_time - TIMER_EPSILON {
            self.charging = true;
            self.request_animation(PlayerAnimation::Charge, host);
            crate::log("Player charged");
        }
    }

    /// Fire отпущена: strong shot если был полный заряд и хватает патронов.
    /// Заряд сбрасывается в любом случае.
    fn release_charge<H: PlayerHost + ?Sized>(&mut self, host: &mut H) -> Result<(), Rejection> {
        let was_charging = self.charging;
        self.charging = false;
        self.charge_timer = 0.0;

        if !was_charging {
            return Ok(());
        }
        if !self.ammo.consume(STRONG_SHOT_COST) {
            return Err(self.insufficient_ammo(STRONG_SHOT_COST));
        }

        self.shot = Some(ShotKind::Strong);
        self.begin_timed(TimedAction::StrongShoot, host);
        Ok(())
    }

    fn handle_movement<H: PlayerHost + ?Sized>(&mut self, input: &PlayerInput, host: &mut H) {
        let axis = input.axis();

        let (locomotion, speed) = if axis.abs() <= self.config.deadzone {
            (Locomotion::Idle, 0.0)
        } else if input.run_held {
            (Locomotion::Running, self.config.run_speed)
        } else {
            (Locomotion::Walking, self.config.walk_speed)
        };
        self.locomotion = locomotion;

        let suppressed =
            self.dashing && self.config.dash_movement == DashMovement::SuppressVelocity;
        let horizontal = if suppressed || speed == 0.0 {
            0.0
        } else {
            axis * speed
        };

        let vertical = host.vertical_velocity();
        host.set_speed_parameter(speed);
        host.set_velocity(Vec2::new(horizontal, vertical));

        if locomotion != Locomotion::Idle {
            self.facing_left = axis < 0.0;
            host.set_facing_flip(self.facing_left);
        }

        // Overlay (dash/shot/charge/damage) владеет анимацией, locomotion ждёт
        if !self.has_overlay() {
            self.request_animation(locomotion.animation(), host);
        }
    }

    fn has_overlay(&self) -> bool {
        self.dashing || self.shot.is_some() || self.charging || self.damaged
    }

    fn request_animation<H: PlayerHost + ?Sized>(&mut self, animation: PlayerAnimation, host: &mut H) {
        if self.current_animation != Some(animation) {
            host.play_animation(animation);
            self.current_animation = Some(animation);
        }
    }

    fn insufficient_ammo(&self, required: u32) -> Rejection {
        Rejection::InsufficientAmmo {
            required,
            available: self.ammo.current,
        }
    }

    fn log_rejection(&self, rejection: Rejection) {
        crate::log(&format!("Player action rejected: {:?}", rejection));
    }
}
