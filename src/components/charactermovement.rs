//! Character movement component and its captured baseline.
//!
//! [`CharacterMovement`] is the movement collaborator a pawn talks to: it
//! exposes the mutable `max_walk_speed` / `max_acceleration` limits and
//! accumulates movement requests through
//! [`add_movement_input`](CharacterMovement::add_movement_input). The
//! [`character_movement`](crate::systems::movement::character_movement)
//! system consumes the accumulated input once per frame.
//!
//! [`MovementBaseline`] stores the limits as they were when the pawn became
//! active, so per-frame multipliers always scale from the same values.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

pub const DEFAULT_MAX_WALK_SPEED: f32 = 600.0;
pub const DEFAULT_MAX_ACCELERATION: f32 = 2048.0;
pub const DEFAULT_BRAKING_DECELERATION: f32 = 2048.0;
/// Yaw degrees per second when orienting to movement.
pub const DEFAULT_ROTATION_RATE: f32 = 540.0;
pub const DEFAULT_JUMP_Z_VELOCITY: f32 = 600.0;
pub const DEFAULT_AIR_CONTROL: f32 = 0.2;

/// Ground movement state and limits for a pawn.
#[derive(Component, Clone, Debug)]
pub struct CharacterMovement {
    /// Top ground speed in world units per second.
    pub max_walk_speed: f32,
    /// Acceleration applied towards the requested direction, units/s².
    pub max_acceleration: f32,
    /// Deceleration applied when no input is requested, units/s².
    pub braking_deceleration: f32,
    /// Yaw rotation rate (degrees per second) used by `orient_rotation_to_movement`.
    pub rotation_rate: f32,
    /// Turn the pawn to face its direction of travel.
    pub orient_rotation_to_movement: bool,
    /// Initial upward velocity of a jump.
    pub jump_z_velocity: f32,
    /// Fraction of lateral control kept while airborne.
    pub air_control: f32,
    /// Current velocity in world units per second.
    pub velocity: Vector3,
    pending_input: Vector3,
}

impl Default for CharacterMovement {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterMovement {
    pub fn new() -> Self {
        Self {
            max_walk_speed: DEFAULT_MAX_WALK_SPEED,
            max_acceleration: DEFAULT_MAX_ACCELERATION,
            braking_deceleration: DEFAULT_BRAKING_DECELERATION,
            rotation_rate: DEFAULT_ROTATION_RATE,
            orient_rotation_to_movement: true,
            jump_z_velocity: DEFAULT_JUMP_Z_VELOCITY,
            air_control: DEFAULT_AIR_CONTROL,
            velocity: Vector3::zero(),
            pending_input: Vector3::zero(),
        }
    }

    /// Builder: custom speed and acceleration limits.
    pub fn with_limits(mut self, max_walk_speed: f32, max_acceleration: f32) -> Self {
        self.max_walk_speed = max_walk_speed.max(0.0);
        self.max_acceleration = max_acceleration.max(0.0);
        self
    }

    /// Request movement along `direction` scaled by `scale`.
    ///
    /// Requests accumulate until the next
    /// [`consume_input_vector`](Self::consume_input_vector).
    pub fn add_movement_input(&mut self, direction: Vector3, scale: f32) {
        self.pending_input += direction * scale;
    }

    /// Accumulated input since the last consume.
    pub fn pending_input(&self) -> Vector3 {
        self.pending_input
    }

    /// Take the accumulated input, clamped to unit length, and reset it.
    pub fn consume_input_vector(&mut self) -> Vector3 {
        let input = self.pending_input;
        self.pending_input = Vector3::zero();
        let len = input.length();
        if len > 1.0 { input * (1.0 / len) } else { input }
    }

    /// Overwrite the limits with `baseline` scaled by `multiplier`.
    pub fn apply_speed_multiplier(&mut self, baseline: &MovementBaseline, multiplier: f32) {
        self.max_walk_speed = baseline.max_walk_speed * multiplier;
        self.max_acceleration = baseline.max_acceleration * multiplier;
    }

    /// Horizontal speed.
    pub fn ground_speed(&self) -> f32 {
        Vector3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }
}

/// Speed and acceleration limits captured when the pawn became active.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MovementBaseline {
    pub max_walk_speed: f32,
    pub max_acceleration: f32,
}

impl MovementBaseline {
    pub fn capture(movement: &CharacterMovement) -> Self {
        Self {
            max_walk_speed: movement.max_walk_speed,
            max_acceleration: movement.max_acceleration,
        }
    }
}
