//! Player-controlled pawn marker.
//!
//! [`PlayerCharacter`] tags the pawn that receives dispatched input. It also
//! carries the look rates used by the rate-based turn axes and whether the
//! pawn body follows the controller rotation. By default it follows none of
//! the axes: the controller only turns the camera, and the pawn turns through
//! `orient_rotation_to_movement`.

use bevy_ecs::prelude::Component;

pub const DEFAULT_BASE_TURN_RATE: f32 = 45.0;
pub const DEFAULT_BASE_LOOK_UP_RATE: f32 = 45.0;

#[derive(Component, Clone, Copy, Debug)]
pub struct PlayerCharacter {
    /// Degrees per second of yaw at full `TurnRate` deflection.
    pub base_turn_rate: f32,
    /// Degrees per second of pitch at full `LookUpRate` deflection.
    pub base_look_up_rate: f32,
    pub use_controller_rotation_pitch: bool,
    pub use_controller_rotation_yaw: bool,
    pub use_controller_rotation_roll: bool,
}

impl Default for PlayerCharacter {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_TURN_RATE, DEFAULT_BASE_LOOK_UP_RATE)
    }
}

impl PlayerCharacter {
    pub fn new(base_turn_rate: f32, base_look_up_rate: f32) -> Self {
        Self {
            base_turn_rate: base_turn_rate.max(0.0),
            base_look_up_rate: base_look_up_rate.max(0.0),
            use_controller_rotation_pitch: false,
            use_controller_rotation_yaw: false,
            use_controller_rotation_roll: false,
        }
    }
}
