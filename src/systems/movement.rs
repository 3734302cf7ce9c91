//! Kinematic ground movement.
//!
//! A deliberately small stand-in for a full character movement component:
//! there are no collision sweeps, floors or falling. Each frame the pending
//! input is consumed, the horizontal velocity accelerates towards it (or
//! brakes when there is none), the position is integrated and, when
//! `orient_rotation_to_movement` is set, the pawn yaws towards its direction
//! of travel at `rotation_rate`.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use crate::components::charactermovement::CharacterMovement;
use crate::components::rotation::{Rotation, normalize_axis, step_towards};
use crate::components::worldposition::WorldPosition;
use crate::resources::worldtime::WorldTime;

/// Below this ground speed the pawn keeps its current facing.
const MIN_ORIENT_SPEED: f32 = 1.0;

pub fn character_movement(
    mut query: Query<(&mut WorldPosition, &mut Rotation, &mut CharacterMovement)>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (mut position, mut rotation, mut movement) in query.iter_mut() {
        let input = movement.consume_input_vector();
        let input = Vector3::new(input.x, 0.0, input.z);
        let input_len = input.length();

        let mut velocity = Vector3::new(movement.velocity.x, 0.0, movement.velocity.z);
        if input_len > 0.0 {
            velocity += input * (movement.max_acceleration * dt / input_len);
            // analog input scales the reachable speed
            let max_speed = movement.max_walk_speed * input_len.min(1.0);
            let speed = velocity.length();
            if speed > max_speed {
                velocity = velocity * (max_speed / speed);
            }
        } else {
            let speed = velocity.length();
            if speed > 0.0 {
                let braked = (speed - movement.braking_deceleration * dt).max(0.0);
                velocity = velocity * (braked / speed);
            }
        }
        movement.velocity = Vector3::new(velocity.x, movement.velocity.y, velocity.z);

        position.pos += velocity * dt;

        if movement.orient_rotation_to_movement && movement.ground_speed() > MIN_ORIENT_SPEED {
            let target_yaw = velocity.z.atan2(velocity.x).to_degrees();
            let max_step = movement.rotation_rate * dt;
            rotation.0.yaw = normalize_axis(step_towards(rotation.0.yaw, target_yaw, max_step));
        }
    }
}
