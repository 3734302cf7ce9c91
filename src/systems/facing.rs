//! Pawn facing from the controller.
//!
//! A pawn whose [`PlayerCharacter`] sets `use_controller_rotation_*` copies
//! those axes of the control rotation onto its own [`Rotation`]. Runs after
//! movement, so a followed axis wins over `orient_rotation_to_movement`.
use bevy_ecs::prelude::*;

use crate::components::controller::Controller;
use crate::components::inputcontrolled::PlayerCharacter;
use crate::components::rotation::Rotation;

pub fn face_control_rotation(mut query: Query<(&mut Rotation, &PlayerCharacter, &Controller)>) {
    for (mut rotation, character, controller) in query.iter_mut() {
        let control = controller.control_rotation();
        if character.use_controller_rotation_pitch {
            rotation.0.pitch = control.pitch;
        }
        if character.use_controller_rotation_yaw {
            rotation.0.yaw = control.yaw;
        }
        if character.use_controller_rotation_roll {
            rotation.0.roll = control.roll;
        }
    }
}
