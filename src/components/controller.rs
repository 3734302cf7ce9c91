//! Player controller state.
//!
//! A [`Controller`] possesses a pawn and owns its control rotation: where the
//! player is looking. Locomotion input is resolved against the control yaw and
//! the spring arm follows the full control rotation. A pawn without a
//! `Controller` ignores directional input.

use bevy_ecs::prelude::Component;

use crate::components::rotation::Rotator;

pub const DEFAULT_MIN_PITCH: f32 = -89.0;
pub const DEFAULT_MAX_PITCH: f32 = 89.0;
/// Degrees per unit of direct (mouse) look input.
pub const DEFAULT_INPUT_SCALE: f32 = 0.1;

#[derive(Component, Clone, Copy, Debug)]
pub struct Controller {
    control_rotation: Rotator,
    initial_rotation: Rotator,
    pub min_pitch: f32,
    pub max_pitch: f32,
    /// Multiplier on direct yaw input (`Turn` axis).
    pub input_yaw_scale: f32,
    /// Multiplier on direct pitch input (`LookUp` axis).
    pub input_pitch_scale: f32,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Rotator::ZERO)
    }
}

impl Controller {
    pub fn new(initial_rotation: Rotator) -> Self {
        let initial_rotation = initial_rotation.normalized();
        Self {
            control_rotation: initial_rotation,
            initial_rotation,
            min_pitch: DEFAULT_MIN_PITCH,
            max_pitch: DEFAULT_MAX_PITCH,
            input_yaw_scale: DEFAULT_INPUT_SCALE,
            input_pitch_scale: DEFAULT_INPUT_SCALE,
        }
    }

    pub fn control_rotation(&self) -> Rotator {
        self.control_rotation
    }

    /// Yaw and roll wrap around; pitch is clamped, never wrapped.
    pub fn set_control_rotation(&mut self, rotation: Rotator) {
        let mut rotation = Rotator {
            pitch: rotation.pitch,
            ..rotation.normalized()
        };
        rotation.clamp_pitch(self.min_pitch, self.max_pitch);
        self.control_rotation = rotation;
    }

    pub fn add_yaw_input(&mut self, degrees: f32) {
        if degrees != 0.0 {
            let mut r = self.control_rotation;
            r.yaw += degrees;
            self.set_control_rotation(r);
        }
    }

    pub fn add_pitch_input(&mut self, degrees: f32) {
        if degrees != 0.0 {
            let mut r = self.control_rotation;
            r.pitch += degrees;
            self.set_control_rotation(r);
        }
    }

    /// Go back to the rotation the controller was created with.
    pub fn reset_rotation(&mut self) {
        self.control_rotation = self.initial_rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaw_input_wraps() {
        let mut c = Controller::new(Rotator::new(0.0, 170.0, 0.0));
        c.add_yaw_input(20.0);
        assert!((c.control_rotation().yaw - -170.0).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_input_clamps() {
        let mut c = Controller::default();
        c.add_pitch_input(200.0);
        assert_eq!(c.control_rotation().pitch, DEFAULT_MAX_PITCH);
        c.add_pitch_input(-500.0);
        assert_eq!(c.control_rotation().pitch, DEFAULT_MIN_PITCH);
    }

    #[test]
    fn test_reset_rotation() {
        let start = Rotator::new(-15.0, 30.0, 0.0);
        let mut c = Controller::new(start);
        c.add_yaw_input(45.0);
        c.add_pitch_input(10.0);
        c.reset_rotation();
        assert_eq!(c.control_rotation(), start);
    }
}
