//! Headless прогон WAKESHOT
//!
//! Спавнит игрока, прокручивает scripted input (бег, выстрел, заряд, dash,
//! урон) и печатает команды, которые ушли бы в движок.

use wakeshot_simulation::{
    create_headless_app, log_info, HostCommand, HostCommandBuffer, PlayerActionController,
    PlayerBundle, PlayerDamageIntent, RawPlayerInput, SimulationPlugin,
};

/// Scripted input по номеру тика (60 тиков = 1 секунда)
fn scripted_input(tick: u32) -> RawPlayerInput {
    match tick {
        // Бежим вправо после пробуждения
        120..=179 => RawPlayerInput {
            horizontal_axis: 1.0,
            run_held: true,
            ..Default::default()
        },
        // Выстрел и удержание до strong shot
        200..=360 => RawPlayerInput {
            fire_held: true,
            ..Default::default()
        },
        // Dash влево
        400..=405 => RawPlayerInput {
            horizontal_axis: -1.0,
            dash_held: true,
            ..Default::default()
        },
        _ => RawPlayerInput::default(),
    }
}

fn main() {
    println!("Starting WAKESHOT headless simulation");

    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);

    let player = app.world_mut().spawn(PlayerBundle::default()).id();

    for tick in 0..600u32 {
        if let Some(mut raw) = app.world_mut().get_mut::<RawPlayerInput>(player) {
            *raw = scripted_input(tick);
        }

        if tick == 450 {
            app.world_mut().send_event(PlayerDamageIntent {
                target: player,
                amount: 35,
            });
        }

        app.update();

        if let Some(mut host) = app.world_mut().get_mut::<HostCommandBuffer>(player) {
            for command in host.drain() {
                match command {
                    HostCommand::PlayAnimation(animation) => {
                        log_info(&format!("tick {}: play {}", tick, animation.clip_name()));
                    }
                    HostCommand::SetTrigger(animation) => {
                        log_info(&format!(
                            "tick {}: trigger {}",
                            tick,
                            animation.trigger_name().unwrap_or(animation.clip_name())
                        ));
                    }
                    _ => {}
                }
            }
        }
    }

    if let Some(controller) = app.world().get::<PlayerActionController>(player) {
        println!("Final status: {:?}", controller.status());
    }

    println!("Simulation complete!");
}
