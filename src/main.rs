//! Dashpawn main entry point.
//!
//! A third-person pawn demo written in Rust using:
//! - **raylib** for windowing, input polling and 3D rendering
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (or the `--config` file), falling back to defaults
//! 2. Initialize the raylib window and the ECS world with its resources
//! 3. Spawn the player pawn and build its input bindings
//! 4. Register the input dispatch observers and the frame schedule
//! 5. Run until the window closes or the quit action is pressed
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --debug
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::Vector3;
use std::path::PathBuf;

use dashpawn::character::{setup_player_input_component, spawn_player_character};
use dashpawn::events::input::ACTION_QUIT;
use dashpawn::events::switchdebug::switch_debug_observer;
use dashpawn::resources::camera3d::ActiveCamera;
use dashpawn::resources::debugmode::DebugMode;
use dashpawn::resources::gameconfig::GameConfig;
use dashpawn::resources::input::InputState;
use dashpawn::resources::worldtime::WorldTime;
use dashpawn::systems::beginplay::capture_movement_baseline;
use dashpawn::systems::camerarig::camera_rig;
use dashpawn::systems::dash::dash_regulator;
use dashpawn::systems::dispatch::{
    action_dispatch_observer, axis_dispatch_observer, touch_dispatch_observer,
};
use dashpawn::systems::facing::face_control_rotation;
use dashpawn::systems::gameconfig::{apply_gameconfig_changes, apply_window_config};
use dashpawn::systems::input::{emit_input_events, update_input_state};
use dashpawn::systems::movement::character_movement;
use dashpawn::systems::render::render_system;
use dashpawn::systems::time::update_world_time;

/// Third-person pawn with a stamina-gated dash
#[derive(Parser)]
#[command(version, about = "Third-person pawn with a stamina-gated dash and a spring-arm camera")]
struct Cli {
    /// Configuration file to load (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,

    /// Write the current configuration to an INI file and exit.
    /// Optionally provide a path (default: the configuration file path).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }

    // Early-exit: write the configuration and quit (no window needed)
    if let Some(maybe_path) = cli.write_config {
        if let Some(path) = maybe_path {
            config.config_path = path;
        }
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    log::info!("Starting dashpawn");
    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Dashpawn")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is bound to the quit action instead
    rl.set_exit_key(None);
    // mouse look
    rl.disable_cursor();

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(setup_player_input_component());
    world.insert_resource(ActiveCamera::default());
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    spawn_player_character(&mut world, &config, Vector3::zero());
    world.insert_resource(config);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(action_dispatch_observer));
    world.spawn(Observer::new(axis_dispatch_observer));
    world.spawn(Observer::new(touch_dispatch_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            // input events are dispatched to the pawn by the observers
            emit_input_events,
            capture_movement_baseline,
            dash_regulator,
            character_movement,
            face_control_rotation,
            camera_rig,
            apply_gameconfig_changes,
            apply_window_config,
            render_system,
        )
            .chain(),
    );

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<InputState>().is_action_active(ACTION_QUIT)
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    log::info!("Bye!");
}
