//! Property-based тесты инвариантов контроллера
//!
//! Произвольные последовательности (advance / damage / die / reload):
//! - 0 ≤ health ≤ max, 0 ≤ ammo ≤ max после каждой операции
//! - после смерти ни одна операция не меняет состояние
//! - dash при cooldown > 0 не начинается
//! - ammo растёт только от reload

use proptest::prelude::*;
use wakeshot_simulation::{
    AnimationClipLengths, ChargeGate, DashMovement, HostCommandBuffer, PlayerActionController,
    PlayerAnimation, PlayerConfig, PlayerInput,
};

#[derive(Debug, Clone)]
enum Op {
    Advance(f32, PlayerInput),
    Damage(i32),
    Die,
    Reload,
}

fn input_strategy() -> impl Strategy<Value = PlayerInput> {
    (
        -1.5f32..1.5,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(horizontal_axis, run_held, fire_pressed, fire_held, fire_released, dash_pressed)| {
                PlayerInput {
                    horizontal_axis,
                    run_held,
                    fire_pressed,
                    fire_held,
                    fire_released,
                    dash_pressed,
                }
            },
        )
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        16 => (0.0f32..0.5, input_strategy()).prop_map(|(delta, input)| Op::Advance(delta, input)),
        3 => (-60i32..60).prop_map(Op::Damage),
        1 => Just(Op::Die),
        2 => Just(Op::Reload),
    ]
}

fn config_strategy() -> impl Strategy<Value = PlayerConfig> {
    (
        0u32..12,
        1u32..120,
        0.0f32..1.5,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(max_ammo, max_health, charge_time, gate_early, suppress)| PlayerConfig {
            max_ammo,
            max_health,
            charge_time,
            wake_delay: 0.2,
            dash_cooldown: 0.8,
            charge_gate: if gate_early {
                ChargeGate::BeforeCharging
            } else {
                ChargeGate::AtRelease
            },
            dash_movement: if suppress {
                DashMovement::SuppressVelocity
            } else {
                DashMovement::OverlayAnimation
            },
            ..Default::default()
        })
}

fn test_host() -> HostCommandBuffer {
    HostCommandBuffer::new(
        AnimationClipLengths::uniform(0.3)
            .with(PlayerAnimation::Wake, 0.2)
            .with(PlayerAnimation::Dash, 0.4),
    )
}

fn apply(controller: &mut PlayerActionController, host: &mut HostCommandBuffer, op: &Op) {
    match op {
        Op::Advance(delta, input) => controller.advance(*delta, input, host),
        Op::Damage(amount) => {
            controller.apply_damage(*amount, host);
        }
        Op::Die => controller.die(host),
        Op::Reload => {
            controller.reload();
        }
    }
}

proptest! {
    #[test]
    fn prop_resources_stay_in_bounds(
        config in config_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..200),
    ) {
        let mut host = test_host();
        let mut controller = PlayerActionController::spawn(config.clone(), &mut host);

        for op in &ops {
            apply(&mut controller, &mut host, op);

            let health = controller.health();
            let ammo = controller.ammo();
            prop_assert!(health.current <= health.max);
            prop_assert_eq!(health.max, config.max_health);
            prop_assert!(ammo.current <= ammo.max);
            prop_assert_eq!(ammo.max, config.max_ammo);
            prop_assert!(controller.dash_cooldown_remaining() >= 0.0);
            prop_assert!(controller.charge_elapsed() >= 0.0);
        }
    }

    #[test]
    fn prop_dead_controller_never_changes(
        config in config_strategy(),
        before in prop::collection::vec(op_strategy(), 0..60),
        after in prop::collection::vec(op_strategy(), 1..60),
    ) {
        let mut host = test_host();
        let mut controller = PlayerActionController::spawn(config, &mut host);

        for op in &before {
            apply(&mut controller, &mut host, op);
        }
        controller.die(&mut host);

        let frozen = controller.clone();
        let commands = host.commands().len();

        for op in &after {
            apply(&mut controller, &mut host, op);
            prop_assert_eq!(&controller, &frozen);
        }
        prop_assert_eq!(host.commands().len(), commands);
        prop_assert_eq!(host.animation_requests(PlayerAnimation::Death), 1);
    }

    #[test]
    fn prop_dash_blocked_while_on_cooldown(
        config in config_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..200),
    ) {
        let mut host = test_host();
        let mut controller = PlayerActionController::spawn(config, &mut host);

        for op in &ops {
            let was_dashing = controller.is_dashing();
            let cooldown = controller.dash_cooldown_remaining();
            let dashes_before = host.animation_requests(PlayerAnimation::Dash);

            apply(&mut controller, &mut host, op);

            if let Op::Advance(delta, input) = op {
                let still_cooling = cooldown > delta + 1e-3;
                if input.dash_pressed && !was_dashing && still_cooling {
                    prop_assert!(!controller.is_dashing());
                    prop_assert_eq!(host.animation_requests(PlayerAnimation::Dash), dashes_before);
                }
            }
        }
    }

    #[test]
    fn prop_ammo_only_grows_on_reload(
        config in config_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..200),
    ) {
        let mut host = test_host();
        let mut controller = PlayerActionController::spawn(config, &mut host);

        for op in &ops {
            let ammo_before = controller.ammo().current;
            apply(&mut controller, &mut host, op);

            if !matches!(op, Op::Reload) {
                prop_assert!(controller.ammo().current <= ammo_before);
            }
        }
    }
}
