//! Camera rig placement.
//!
//! The spring arm hangs off the pawn's pivot (position plus
//! `pivot_offset`). Its rotation starts from the controller's control
//! rotation when `use_pawn_control_rotation` is set, or from a zero rotation
//! otherwise. Without `absolute_rotation` the pawn's own [`Rotation`] is added
//! on top, so the arm swings with the body. The follow camera sits at the far
//! end of the arm and looks back at the pivot, or along the control rotation
//! when the camera itself uses it. There are no collision traces, so the arm
//! never shortens.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use crate::components::camerarig::{FollowCamera, SpringArm};
use crate::components::controller::Controller;
use crate::components::inputcontrolled::PlayerCharacter;
use crate::components::rotation::{Rotation, Rotator};
use crate::components::worldposition::WorldPosition;
use crate::resources::camera3d::ActiveCamera;

/// Rotation of the arm for a pawn facing `pawn_rotation`.
pub fn arm_rotation(
    arm: &SpringArm,
    pawn_rotation: Rotator,
    controller: Option<&Controller>,
) -> Rotator {
    let mut rotation = match controller {
        Some(controller) if arm.use_pawn_control_rotation => controller.control_rotation(),
        _ => Rotator::ZERO,
    };
    if !arm.absolute_rotation {
        rotation.pitch += pawn_rotation.pitch;
        rotation.yaw += pawn_rotation.yaw;
        rotation.roll += pawn_rotation.roll;
    }
    rotation.normalized()
}

/// Place every follow camera and publish the player's as [`ActiveCamera`].
pub fn camera_rig(
    mut query: Query<(
        &WorldPosition,
        &Rotation,
        &SpringArm,
        &mut FollowCamera,
        Option<&Controller>,
        Has<PlayerCharacter>,
    )>,
    mut active: ResMut<ActiveCamera>,
) {
    for (position, rotation, arm, mut camera, controller, is_player) in query.iter_mut() {
        let arm_rotation = arm_rotation(arm, rotation.0, controller);
        let pivot = position.pos + arm.pivot_offset;
        camera.position = pivot + arm_rotation.forward() * -arm.target_arm_length;
        camera.target = match controller {
            Some(controller) if camera.use_pawn_control_rotation => {
                camera.position + controller.control_rotation().forward()
            }
            _ => pivot,
        };

        if is_player {
            active.0.position = camera.position;
            active.0.target = camera.target;
            active.0.up = Vector3::new(0.0, 1.0, 0.0);
            active.0.fovy = camera.fovy;
        }
    }
}
