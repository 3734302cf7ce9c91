//! The player character.
//!
//! This module wires a third-person pawn together and defines what its inputs
//! do:
//! - [`spawn_player_character`] builds the pawn entity with every collaborator
//!   it needs (capsule, movement, spring arm, follow camera, controller, dash)
//! - [`setup_player_input_component`] builds the [`InputBindings`] table that
//!   maps named inputs to the handler functions below
//! - the handlers (`start_dashing`, `move_forward`, `turn_at_rate`, ...) act on
//!   a [`PawnContext`] borrowed from the pawn's components
//!
//! Handlers never fail. Directional handlers do nothing for a zero value or
//! for a pawn without a [`Controller`].

use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::{Vector2, Vector3};

use crate::components::camerarig::{FollowCamera, SpringArm};
use crate::components::capsule::CapsuleCollider;
use crate::components::charactermovement::CharacterMovement;
use crate::components::controller::Controller;
use crate::components::dash::Dash;
use crate::components::inputcontrolled::PlayerCharacter;
use crate::components::rotation::{Rotation, Rotator};
use crate::components::worldposition::WorldPosition;
use crate::events::input::{
    ACTION_DASH, ACTION_RESET_VIEW, AXIS_LOOK_UP, AXIS_LOOK_UP_RATE, AXIS_MOVE_FORWARD,
    AXIS_MOVE_RIGHT, AXIS_TURN, AXIS_TURN_RATE, InputEdge,
};
use crate::resources::gameconfig::GameConfig;
use crate::resources::inputbindings::InputBindings;

/// Mutable view of one pawn handed to input handlers.
pub struct PawnContext<'a> {
    pub dash: &'a mut Dash,
    pub movement: &'a mut CharacterMovement,
    /// `None` when no controller possesses the pawn.
    pub controller: Option<&'a mut Controller>,
    pub character: &'a PlayerCharacter,
    /// Seconds covered by the current frame.
    pub delta: f32,
}

/// Spawn a fully wired player pawn at `position`.
///
/// The pawn starts possessed, facing +X, with a full stamina reservoir.
/// [`MovementBaseline`](crate::components::charactermovement::MovementBaseline)
/// is not inserted here; it is captured on the first frame the pawn is active.
pub fn spawn_player_character(world: &mut World, config: &GameConfig, position: Vector3) -> Entity {
    let capsule = CapsuleCollider::new(config.capsule_radius, config.capsule_half_height);

    let mut movement =
        CharacterMovement::new().with_limits(config.max_walk_speed, config.max_acceleration);
    movement.braking_deceleration = config.braking_deceleration;
    movement.orient_rotation_to_movement = true;
    movement.rotation_rate = config.rotation_rate;
    movement.jump_z_velocity = config.jump_z_velocity;
    movement.air_control = config.air_control;

    let mut spring_arm = SpringArm::new(config.arm_length);
    // pivot a little above the capsule centre so the pawn sits low in frame
    spring_arm.pivot_offset = Vector3::new(0.0, capsule.half_height * 0.5, 0.0);

    let mut controller = Controller::new(Rotator::ZERO);
    controller.input_yaw_scale = config.mouse_sensitivity;
    controller.input_pitch_scale = config.mouse_sensitivity;

    let entity = world
        .spawn((
            PlayerCharacter::new(config.base_turn_rate, config.base_look_up_rate),
            WorldPosition {
                pos: Vector3::new(position.x, position.y + capsule.half_height, position.z),
            },
            Rotation(Rotator::ZERO),
            capsule,
            movement,
            spring_arm,
            FollowCamera::new(config.fovy),
            controller,
            Dash::with_params(config.max_stamina, config.dash_speed_multiplier),
        ))
        .id();

    info!("Spawned player character {:?}", entity);
    entity
}

/// Build the input subscription table of the player character.
pub fn setup_player_input_component() -> InputBindings {
    let mut bindings = InputBindings::new();

    bindings.bind_action(ACTION_DASH, InputEdge::Pressed, start_dashing);
    bindings.bind_action(ACTION_DASH, InputEdge::Released, stop_dashing);
    bindings.bind_action(ACTION_RESET_VIEW, InputEdge::Pressed, reset_view);

    bindings.bind_axis(AXIS_MOVE_FORWARD, move_forward);
    bindings.bind_axis(AXIS_MOVE_RIGHT, move_right);

    // two versions of the rotation bindings: direct devices (mouse) and
    // rate devices (keys, analog stick)
    bindings.bind_axis(AXIS_TURN, add_controller_yaw_input);
    bindings.bind_axis(AXIS_TURN_RATE, turn_at_rate);
    bindings.bind_axis(AXIS_LOOK_UP, add_controller_pitch_input);
    bindings.bind_axis(AXIS_LOOK_UP_RATE, look_up_at_rate);

    // touch devices
    bindings.bind_touch(InputEdge::Pressed, touch_started);
    bindings.bind_touch(InputEdge::Released, touch_stopped);

    bindings
}

pub fn start_dashing(ctx: &mut PawnContext) {
    if !ctx.dash.is_dashing() {
        debug!("Dash started, stamina {:.2}", ctx.dash.stamina());
    }
    ctx.dash.start();
}

pub fn stop_dashing(ctx: &mut PawnContext) {
    if ctx.dash.is_dashing() {
        debug!("Dash stopped, stamina {:.2}", ctx.dash.stamina());
    }
    ctx.dash.stop();
}

pub fn touch_started(ctx: &mut PawnContext, _finger: u32, _location: Vector2) {
    start_dashing(ctx);
}

pub fn touch_stopped(ctx: &mut PawnContext, _finger: u32, _location: Vector2) {
    stop_dashing(ctx);
}

/// Move along the controller's ground-plane forward.
pub fn move_forward(ctx: &mut PawnContext, value: f32) {
    if value == 0.0 {
        return;
    }
    let Some(controller) = ctx.controller.as_deref() else {
        return;
    };
    let direction = controller.control_rotation().yaw_only().forward();
    ctx.movement.add_movement_input(direction, value);
}

/// Move along the controller's ground-plane right.
pub fn move_right(ctx: &mut PawnContext, value: f32) {
    if value == 0.0 {
        return;
    }
    let Some(controller) = ctx.controller.as_deref() else {
        return;
    };
    let direction = controller.control_rotation().yaw_only().right();
    ctx.movement.add_movement_input(direction, value);
}

/// `rate` is normalized: 1.0 turns at the full base turn rate.
pub fn turn_at_rate(ctx: &mut PawnContext, rate: f32) {
    let degrees = rate * ctx.character.base_turn_rate * ctx.delta;
    if let Some(controller) = ctx.controller.as_deref_mut() {
        controller.add_yaw_input(degrees);
    }
}

/// `rate` is normalized: 1.0 pitches at the full base look-up rate.
pub fn look_up_at_rate(ctx: &mut PawnContext, rate: f32) {
    let degrees = rate * ctx.character.base_look_up_rate * ctx.delta;
    if let Some(controller) = ctx.controller.as_deref_mut() {
        controller.add_pitch_input(degrees);
    }
}

pub fn add_controller_yaw_input(ctx: &mut PawnContext, value: f32) {
    if let Some(controller) = ctx.controller.as_deref_mut() {
        let degrees = value * controller.input_yaw_scale;
        controller.add_yaw_input(degrees);
    }
}

pub fn add_controller_pitch_input(ctx: &mut PawnContext, value: f32) {
    if let Some(controller) = ctx.controller.as_deref_mut() {
        let degrees = value * controller.input_pitch_scale;
        controller.add_pitch_input(degrees);
    }
}

/// Put the view back where it started.
pub fn reset_view(ctx: &mut PawnContext) {
    if let Some(controller) = ctx.controller.as_deref_mut() {
        controller.reset_rotation();
        debug!("View reset");
    }
}

/// Remaining stamina as a fraction in `[0, 1]`, for the HUD.
pub fn get_dash_stamina_rate(dash: &Dash) -> f32 {
    dash.stamina_rate()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    struct Pawn {
        dash: Dash,
        movement: CharacterMovement,
        controller: Option<Controller>,
        character: PlayerCharacter,
    }

    impl Pawn {
        fn new() -> Self {
            Self {
                dash: Dash::new(),
                movement: CharacterMovement::new(),
                controller: Some(Controller::default()),
                character: PlayerCharacter::default(),
            }
        }

        fn run<R>(&mut self, delta: f32, f: impl FnOnce(&mut PawnContext) -> R) -> R {
            let mut ctx = PawnContext {
                dash: &mut self.dash,
                movement: &mut self.movement,
                controller: self.controller.as_mut(),
                character: &self.character,
                delta,
            };
            f(&mut ctx)
        }
    }

    #[test]
    fn test_start_and_stop_dashing() {
        let mut pawn = Pawn::new();
        pawn.run(0.0, start_dashing);
        assert!(pawn.dash.is_dashing());
        pawn.run(0.0, stop_dashing);
        assert!(!pawn.dash.is_dashing());
    }

    #[test]
    fn test_touch_behaves_like_dash_button() {
        let mut pawn = Pawn::new();
        let loc = Vector2 { x: 5.0, y: 5.0 };
        pawn.run(0.0, |ctx| touch_started(ctx, 0, loc));
        assert!(pawn.dash.is_dashing());
        pawn.run(0.0, |ctx| touch_stopped(ctx, 0, loc));
        assert!(!pawn.dash.is_dashing());
    }

    #[test]
    fn test_move_forward_uses_controller_yaw() {
        let mut pawn = Pawn::new();
        pawn.controller = Some(Controller::new(Rotator::new(40.0, 90.0, 0.0)));
        pawn.run(0.0, |ctx| move_forward(ctx, 1.0));
        let input = pawn.movement.pending_input();
        // pitch ignored: straight along +Z on the ground
        assert!(approx_eq(input.x, 0.0));
        assert!(approx_eq(input.y, 0.0));
        assert!(approx_eq(input.z, 1.0));
    }

    #[test]
    fn test_move_right_scales_by_value() {
        let mut pawn = Pawn::new();
        pawn.run(0.0, |ctx| move_right(ctx, -0.5));
        let input = pawn.movement.pending_input();
        assert!(approx_eq(input.z, -0.5));
        assert!(approx_eq(input.x, 0.0));
    }

    #[test]
    fn test_move_without_controller_is_noop() {
        let mut pawn = Pawn::new();
        pawn.controller = None;
        pawn.run(0.0, |ctx| move_forward(ctx, 1.0));
        pawn.run(0.0, |ctx| move_right(ctx, 1.0));
        assert!(approx_eq(pawn.movement.pending_input().length(), 0.0));
    }

    #[test]
    fn test_move_zero_value_is_noop() {
        let mut pawn = Pawn::new();
        pawn.run(0.0, |ctx| move_forward(ctx, 0.0));
        assert!(approx_eq(pawn.movement.pending_input().length(), 0.0));
    }

    #[test]
    fn test_turn_at_rate_uses_base_rate_and_delta() {
        let mut pawn = Pawn::new();
        pawn.run(0.5, |ctx| turn_at_rate(ctx, 1.0));
        let yaw = pawn.controller.unwrap().control_rotation().yaw;
        assert!(approx_eq(yaw, 22.5));
    }

    #[test]
    fn test_look_up_at_rate() {
        let mut pawn = Pawn::new();
        pawn.run(1.0, |ctx| look_up_at_rate(ctx, -1.0));
        let pitch = pawn.controller.unwrap().control_rotation().pitch;
        assert!(approx_eq(pitch, -45.0));
    }

    #[test]
    fn test_direct_look_input_uses_controller_scale() {
        let mut pawn = Pawn::new();
        pawn.run(1.0, |ctx| add_controller_yaw_input(ctx, 100.0));
        pawn.run(1.0, |ctx| add_controller_pitch_input(ctx, 50.0));
        let rot = pawn.controller.unwrap().control_rotation();
        assert!(approx_eq(rot.yaw, 10.0));
        assert!(approx_eq(rot.pitch, 5.0));
    }

    #[test]
    fn test_reset_view() {
        let mut pawn = Pawn::new();
        pawn.run(1.0, |ctx| turn_at_rate(ctx, 1.0));
        pawn.run(0.0, reset_view);
        let rot = pawn.controller.unwrap().control_rotation();
        assert_eq!(rot, Rotator::ZERO);
    }

    #[test]
    fn test_get_dash_stamina_rate() {
        let dash = Dash::new().with_stamina(2.5);
        assert!(approx_eq(get_dash_stamina_rate(&dash), 0.5));
    }

    #[test]
    fn test_bindings_cover_every_input() {
        let bindings = setup_player_input_component();
        assert_eq!(bindings.action_handlers(ACTION_DASH, InputEdge::Pressed).len(), 1);
        assert_eq!(bindings.action_handlers(ACTION_DASH, InputEdge::Released).len(), 1);
        assert_eq!(bindings.action_handlers(ACTION_RESET_VIEW, InputEdge::Pressed).len(), 1);
        for axis in [
            AXIS_MOVE_FORWARD,
            AXIS_MOVE_RIGHT,
            AXIS_TURN,
            AXIS_TURN_RATE,
            AXIS_LOOK_UP,
            AXIS_LOOK_UP_RATE,
        ] {
            assert!(bindings.is_axis_bound(axis), "{axis} not bound");
        }
        assert_eq!(bindings.touch_handlers(InputEdge::Pressed).len(), 1);
        assert_eq!(bindings.touch_handlers(InputEdge::Released).len(), 1);
    }
}
