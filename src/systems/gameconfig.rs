//! Game configuration change detection systems.
//!
//! Monitors [`GameConfig`] for changes and pushes the new settings where they
//! belong:
//! - [`apply_gameconfig_changes`] updates every spawned pawn (dash reservoir,
//!   movement limits and their baseline, capsule, look rates, camera rig)
//! - [`apply_window_config`] updates the raylib window (FPS, vsync,
//!   fullscreen, size)
use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi;

use crate::components::camerarig::{FollowCamera, SpringArm};
use crate::components::capsule::CapsuleCollider;
use crate::components::charactermovement::{CharacterMovement, MovementBaseline};
use crate::components::controller::Controller;
use crate::components::dash::Dash;
use crate::components::inputcontrolled::PlayerCharacter;
use crate::resources::gameconfig::GameConfig;

/// Push changed gameplay settings onto every player pawn.
///
/// Stamina keeps its current fraction of the reservoir. Movement limits are
/// written to the [`MovementBaseline`] when the pawn already has one, since
/// the dash regulator rebuilds the live limits from it every frame.
pub fn apply_gameconfig_changes(
    config: Res<GameConfig>,
    mut pawns: Query<
        (
            &mut Dash,
            &mut CharacterMovement,
            Option<&mut MovementBaseline>,
            &mut CapsuleCollider,
            &mut PlayerCharacter,
            &mut SpringArm,
            &mut FollowCamera,
            Option<&mut Controller>,
        ),
    >,
) {
    if !config.is_changed() || config.is_added() {
        return;
    }

    let mut count = 0;
    for (
        mut dash,
        mut movement,
        baseline,
        mut capsule,
        mut character,
        mut arm,
        mut camera,
        controller,
    ) in pawns.iter_mut()
    {
        dash.reconfigure(config.max_stamina, config.dash_speed_multiplier);

        match baseline {
            Some(mut baseline) => {
                baseline.max_walk_speed = config.max_walk_speed;
                baseline.max_acceleration = config.max_acceleration;
            }
            None => {
                movement.max_walk_speed = config.max_walk_speed;
                movement.max_acceleration = config.max_acceleration;
            }
        }
        movement.braking_deceleration = config.braking_deceleration;
        movement.rotation_rate = config.rotation_rate;
        movement.jump_z_velocity = config.jump_z_velocity;
        movement.air_control = config.air_control;

        *capsule = CapsuleCollider::new(config.capsule_radius, config.capsule_half_height);
        character.base_turn_rate = config.base_turn_rate;
        character.base_look_up_rate = config.base_look_up_rate;

        arm.target_arm_length = config.arm_length;
        arm.pivot_offset.y = capsule.half_height * 0.5;
        camera.fovy = config.fovy;

        if let Some(mut controller) = controller {
            controller.input_yaw_scale = config.mouse_sensitivity;
            controller.input_pitch_scale = config.mouse_sensitivity;
        }
        count += 1;
    }

    info!("GameConfig changes applied to {} pawn(s)", count);
}

/// Apply window settings from a changed [`GameConfig`].
///
/// Runs on the first frame too, so the window picks up vsync and FPS from
/// the loaded file.
pub fn apply_window_config(config: Res<GameConfig>, mut rl: NonSendMut<raylib::RaylibHandle>) {
    if !config.is_changed() {
        return;
    }

    if config.fullscreen != rl.is_window_fullscreen() {
        info!("Switching fullscreen: {}", config.fullscreen);
        rl.toggle_fullscreen();
    }

    if !config.fullscreen {
        let (w, h) = config.window_size();
        if rl.get_screen_width() != w as i32 || rl.get_screen_height() != h as i32 {
            info!("Resizing window to {}x{}", w, h);
            rl.set_window_size(w as i32, h as i32);
        }
    }

    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }

    rl.set_target_fps(config.target_fps);
    info!(
        "Window config applied: fps={}, vsync={}",
        config.target_fps, config.vsync
    );
}
