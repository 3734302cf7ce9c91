//! Third-person camera rig components.
//!
//! A pawn carries a [`SpringArm`] (the camera boom) and a [`FollowCamera`]
//! mounted at the end of it. Both are configured once when the pawn is
//! spawned; the [`camera_rig`](crate::systems::camerarig::camera_rig) system
//! places the camera every frame from the pawn position and the controller
//! rotation.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

pub const DEFAULT_ARM_LENGTH: f32 = 300.0;
pub const DEFAULT_FOVY: f32 = 60.0;

/// Camera boom pulling the follow camera behind the pawn.
#[derive(Component, Clone, Copy, Debug)]
pub struct SpringArm {
    /// Distance from the pivot to the camera socket.
    pub target_arm_length: f32,
    /// Offset of the arm pivot from the pawn position.
    pub pivot_offset: Vector3,
    /// Ignore the pawn's own rotation.
    pub absolute_rotation: bool,
    /// Rotate the arm with the controller's control rotation.
    pub use_pawn_control_rotation: bool,
}

impl Default for SpringArm {
    fn default() -> Self {
        Self::new(DEFAULT_ARM_LENGTH)
    }
}

impl SpringArm {
    pub fn new(target_arm_length: f32) -> Self {
        Self {
            target_arm_length: target_arm_length.max(0.0),
            pivot_offset: Vector3::zero(),
            absolute_rotation: true,
            use_pawn_control_rotation: true,
        }
    }
}

/// Camera mounted at the spring arm socket.
#[derive(Component, Clone, Copy, Debug)]
pub struct FollowCamera {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Rotate relative to the arm with the control rotation. Off: the camera
    /// just looks down the arm.
    pub use_pawn_control_rotation: bool,
    /// Last computed eye position.
    pub position: Vector3,
    /// Last computed look-at point.
    pub target: Vector3,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new(DEFAULT_FOVY)
    }
}

impl FollowCamera {
    pub fn new(fovy: f32) -> Self {
        Self {
            fovy: fovy.clamp(1.0, 179.0),
            use_pawn_control_rotation: false,
            position: Vector3::zero(),
            target: Vector3::zero(),
        }
    }
}
